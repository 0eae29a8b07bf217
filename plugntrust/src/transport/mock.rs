// plugntrust/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses in FIFO order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of receive calls that should fail with Timeout
    /// before queued responses are served again
    pub receive_failures: usize,
    /// Count of transport-level resets, for assertions
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Set how many subsequent receive calls should fail (for tests).
    pub fn set_receive_failures(&mut self, n: usize) {
        self.receive_failures = n;
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Timeout);
        }
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the sent log but preserves queued responses so unit
        // tests can pre-seed expected replies before handing the transport
        // to a Session.
        self.resets += 1;
        self.sent.clear();
        Ok(())
    }

    fn delay_ms(&mut self, _ms: u64) {
        // Never sleep in tests
    }
}
