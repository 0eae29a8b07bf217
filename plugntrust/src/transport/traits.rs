// plugntrust/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/session logic.
pub trait Transport {
    /// Send raw frame bytes to the secure element
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive raw frame bytes from the secure element with a timeout in
    /// milliseconds
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Perform a transport-level reset (power cycle, bus re-init)
    fn reset(&mut self) -> Result<()>;

    /// Block for `ms` milliseconds. Default implementation sleeps the
    /// calling thread; bus-specific transports may override when they
    /// carry their own delay source.
    fn delay_ms(&mut self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}
