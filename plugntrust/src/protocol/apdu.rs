// plugntrust/src/protocol/apdu.rs

use crate::constants::MAX_APDU_PAYLOAD_LEN;
use crate::{Error, Result};

/// One secure-element command unit.
///
/// Wire layout: `CLA INS P1 P2 | LC(1) | payload(LC) | LE(0|1|2)`. The LE
/// field is absent when no response data is expected; one byte for expected
/// lengths up to 255 (with 0x00 meaning "read all available"); two bytes
/// big-endian above that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    pub payload: Vec<u8>,
    pub le: Option<u16>,
}

/// Expected-length sentinel requesting all available response bytes.
pub const LE_READ_ALL: u16 = 0x0000;

impl Apdu {
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            payload: Vec::new(),
            le: None,
        }
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = payload;
        self
    }

    /// Request `le` response bytes.
    pub fn expect(mut self, le: u16) -> Self {
        self.le = Some(le);
        self
    }

    /// Request all available response bytes.
    pub fn expect_all(self) -> Self {
        self.expect(LE_READ_ALL)
    }

    fn le_field_len(&self) -> usize {
        match self.le {
            None => 0,
            Some(le) if le <= 0xFF => 1,
            Some(_) => 2,
        }
    }

    /// Total serialized byte count: header (4) + LC (1) + payload + LE field.
    /// The frame LEN field must equal this plus the two CRC bytes.
    pub fn serialized_len(&self) -> usize {
        5 + self.payload.len() + self.le_field_len()
    }

    /// Serialize into the information field of an I-block.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_APDU_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_APDU_PAYLOAD_LEN,
                actual: self.payload.len(),
            });
        }

        let mut out = Vec::with_capacity(self.serialized_len());
        out.push(self.cla);
        out.push(self.ins);
        out.push(self.p1);
        out.push(self.p2);
        out.push(self.payload.len() as u8);
        out.extend_from_slice(&self.payload);
        match self.le {
            None => {}
            Some(le) if le <= 0xFF => out.push(le as u8),
            Some(le) => out.extend_from_slice(&le.to_be_bytes()),
        }
        Ok(out)
    }
}
