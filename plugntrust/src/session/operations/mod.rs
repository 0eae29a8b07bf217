// plugntrust/src/session/operations/mod.rs

//! Per-operation helpers running on a ready session. The typed methods on
//! [`Session<Ready>`](crate::session::Session) delegate here.

pub mod crypto;
pub mod info;
pub mod object;
