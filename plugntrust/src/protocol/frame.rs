// plugntrust/src/protocol/frame.rs

use crate::constants::*;
use crate::protocol::checksum::{crc16, crc16_bytes};
use crate::{Error, Result};

/// Link-layer block class, derived from the top two PCB bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Carries an APDU. `more` mirrors the chaining bit; it is decoded but
    /// multi-frame reassembly is not implemented.
    Information { seq: bool, more: bool },
    /// Acknowledgement block
    ReceiveReady { seq: bool },
    /// Session control block (reset, end-session, get-ATR, ...)
    Supervisory { pcb: u8 },
}

/// Link-layer frame helper. Provides encode/decode of the wire frame
/// Format: [NAD(1)] [PCB(1)] [LEN(1)] [Payload(LEN-2)] [CRC16(2)]
/// LEN counts the payload plus the two CRC bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub nad: u8,
    pub pcb: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(nad: u8, pcb: u8, payload: Vec<u8>) -> Self {
        Self { nad, pcb, payload }
    }

    /// Host -> device I-block around serialized APDU bytes.
    pub fn information(seq: bool, apdu_bytes: Vec<u8>) -> Self {
        let mut pcb = PCB_I_BLOCK;
        if seq {
            pcb |= PCB_I_SEQ;
        }
        Self::new(NAD_HOST_TO_SE, pcb, apdu_bytes)
    }

    /// Host -> device S-block request with an empty information field.
    pub fn supervisory(pcb: u8) -> Self {
        Self::new(NAD_HOST_TO_SE, pcb, Vec::new())
    }

    /// Classify the PCB byte.
    pub fn block_type(&self) -> BlockType {
        match self.pcb & 0xC0 {
            PCB_R_BLOCK => BlockType::ReceiveReady {
                seq: self.pcb & PCB_R_SEQ != 0,
            },
            PCB_S_BLOCK => BlockType::Supervisory { pcb: self.pcb },
            _ => BlockType::Information {
                seq: self.pcb & PCB_I_SEQ != 0,
                more: self.pcb & PCB_I_MORE != 0,
            },
        }
    }

    /// Serialize to wire bytes, computing the CRC over NAD..payload.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.payload.len() > MAX_FRAME_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_FRAME_PAYLOAD_LEN,
                actual: self.payload.len(),
            });
        }

        let len = (self.payload.len() + 2) as u8;
        let mut out = Vec::with_capacity(MIN_FRAME_LEN + self.payload.len());
        out.push(self.nad);
        out.push(self.pcb);
        out.push(len);
        out.extend_from_slice(&self.payload);
        let crc = crc16_bytes(&out);
        out.extend_from_slice(&crc);
        Ok(out)
    }

    /// Parse received wire bytes, validating length consistency and CRC.
    ///
    /// Validation order: minimal length, declared-vs-actual length, CRC,
    /// node address. A mismatch between the declared length and the received
    /// byte count is a structural error; everything after that is covered by
    /// the checksum.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        if raw.len() < MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MIN_FRAME_LEN,
                actual: raw.len(),
            });
        }

        let len = raw[2] as usize;
        if len < 2 {
            return Err(Error::FrameFormat(format!("length field too small: {}", len)));
        }
        let required = 3 + len;
        if raw.len() != required {
            return Err(Error::InvalidLength {
                expected: required,
                actual: raw.len(),
            });
        }

        let crc_start = raw.len() - 2;
        let expected = crc16(&raw[..crc_start]);
        let actual = u16::from_le_bytes([raw[crc_start], raw[crc_start + 1]]);
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        let nad = raw[0];
        if nad != NAD_SE_TO_HOST && nad != NAD_HOST_TO_SE {
            return Err(Error::FrameFormat(format!("bad node address {:#04x}", nad)));
        }

        Ok(Frame {
            nad,
            pcb: raw[1],
            payload: raw[3..crc_start].to_vec(),
        })
    }
}
