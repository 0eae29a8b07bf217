// plugntrust/src/lib.rs

//! plugntrust
//!
//! Pure Rust driver for NXP Plug & Trust secure elements (A5000/SE05x
//! family) speaking the T=1-style framed APDU protocol.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod tlv;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
