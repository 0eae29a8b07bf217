// plugntrust/src/protocol/mod.rs

//! Wire protocol layers: CRC-16 checksum, T=1-style framing, ISO 7816-4
//! APDU structuring and the command/response codec built on top.

pub mod apdu;
pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod responses;

pub use apdu::Apdu;
pub use checksum::crc16;
pub use commands::Command;
pub use frame::{BlockType, Frame};
pub use responses::Response;
