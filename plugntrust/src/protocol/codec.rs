// plugntrust/src/protocol/codec.rs

use crate::constants::{PCB_I_BLOCK, PCB_S_RESPONSE};
use crate::Result;

use super::apdu::Apdu;
use super::frame::{BlockType, Frame};

/// Encode an APDU into a full I-block wire frame with the given host send
/// sequence bit.
pub fn encode_information_frame(seq: bool, apdu: &Apdu) -> Result<Vec<u8>> {
    Frame::information(seq, apdu.encode()?).encode()
}

/// Encode an S-block request wire frame (empty information field).
pub fn encode_supervisory_frame(pcb: u8) -> Result<Vec<u8>> {
    Frame::supervisory(pcb).encode()
}

/// Decode a received wire frame and return the information field of the
/// contained I-block. Any other block class is an unexpected-block error.
/// A set chaining bit is rejected: multi-frame reassembly is not
/// implemented, responses must fit one frame.
pub fn decode_information_frame(raw: &[u8]) -> Result<Vec<u8>> {
    let frame = Frame::decode(raw)?;
    match frame.block_type() {
        BlockType::Information { more: true, .. } => Err(crate::Error::UnsupportedOperation(
            "multi-frame chaining".into(),
        )),
        BlockType::Information { .. } => Ok(frame.payload),
        _ => Err(crate::Error::UnexpectedBlock {
            expected: PCB_I_BLOCK,
            actual: frame.pcb,
        }),
    }
}

/// Decode a received wire frame expected to answer the S-block request with
/// PCB `request_pcb`, returning its information field (ATR data for a soft
/// reset or get-ATR, empty for end-session).
pub fn decode_supervisory_frame(raw: &[u8], request_pcb: u8) -> Result<Vec<u8>> {
    let frame = Frame::decode(raw)?;
    let expected = request_pcb | PCB_S_RESPONSE;
    if frame.pcb != expected {
        return Err(crate::Error::UnexpectedBlock {
            expected,
            actual: frame.pcb,
        });
    }
    Ok(frame.payload)
}
