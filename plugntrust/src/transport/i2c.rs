// plugntrust/src/transport/i2c.rs

use embedded_hal::i2c::I2c;

use crate::transport::traits::Transport;
use crate::utils::timeout::DEFAULT_RECEIVE_TIMEOUT_MS;
use crate::{Error, Result};

/// Default bus address of the secure element.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x48;

/// Interval between bus polls while waiting for the device to have a frame
/// ready. The device NACKs reads until then.
const POLL_INTERVAL_MS: u64 = 1;

/// Blocking I2C transport over an `embedded-hal` 1.0 bus.
///
/// The device signals "not ready" by NACKing the address byte, so both
/// send and receive retry on bus errors until the timeout budget runs out.
pub struct I2cTransport<B> {
    bus: B,
    address: u8,
}

impl<B: I2c> I2cTransport<B> {
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_I2C_ADDRESS)
    }

    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Release the underlying bus.
    pub fn into_inner(self) -> B {
        self.bus
    }

    fn read_exact(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        let mut waited = 0;
        loop {
            match self.bus.read(self.address, buf) {
                Ok(()) => return Ok(()),
                Err(_) if waited < timeout_ms => {
                    std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
                    waited += POLL_INTERVAL_MS;
                }
                Err(_) => return Err(Error::Timeout),
            }
        }
    }
}

impl<B: I2c> Transport for I2cTransport<B> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut waited = 0;
        loop {
            match self.bus.write(self.address, data) {
                Ok(()) => return Ok(()),
                Err(_) if waited < DEFAULT_RECEIVE_TIMEOUT_MS => {
                    std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
                    waited += POLL_INTERVAL_MS;
                }
                Err(e) => return Err(Error::Transport(format!("i2c write: {:?}", e))),
            }
        }
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        // Frames arrive as NAD|PCB|LEN followed by LEN payload+CRC bytes.
        // Read the header first to learn how much remains.
        let mut header = [0u8; 3];
        self.read_exact(&mut header, timeout_ms)?;
        let remaining = header[2] as usize;
        let mut frame = vec![0u8; 3 + remaining];
        frame[..3].copy_from_slice(&header);
        if remaining > 0 {
            self.read_exact(&mut frame[3..], timeout_ms)?;
        }
        Ok(frame)
    }

    fn reset(&mut self) -> Result<()> {
        // No bus-level reset line is modeled here; the session layer issues
        // a soft reset S-block right after connecting.
        Ok(())
    }
}
