//! Timeout helpers shared by transports and the session layer.

use std::time::Duration;

/// Default receive timeout in milliseconds used by the session when the
/// caller does not provide one. The data-link layer itself has no software
/// timeout; a hung transport hangs the call chain up to this bound.
pub const DEFAULT_RECEIVE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default receive timeout as Duration.
pub fn default_receive_timeout() -> Duration {
    ms(DEFAULT_RECEIVE_TIMEOUT_MS)
}
