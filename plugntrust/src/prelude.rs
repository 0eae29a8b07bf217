// plugntrust/src/prelude.rs

pub use crate::protocol::{Apdu, Command, Frame, Response};
pub use crate::session::Session;
pub use crate::session::{Attached, Idle, Ready};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    AppletVersion, AtrInfo, CipherDirection, CipherMode, Error, MemoryType, ObjectId,
    ObjectPresence, Result, StatusWord,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_receive_timeout, ms};
