//! Small reusable helpers: hex formatting for log output and timeout
//! defaults shared by transports.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
