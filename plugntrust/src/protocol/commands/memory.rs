// plugntrust/src/protocol/commands/memory.rs

use crate::constants::{CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_MEMORY, TAG_1};
use crate::protocol::apdu::Apdu;
use crate::tlv::TlvWriter;
use crate::types::MemoryType;
use crate::Result;

/// Free-memory query for one memory region.
pub fn encode_get_free_memory(memory: MemoryType) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u8(TAG_1, memory as u8)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_MEMORY)
        .with_payload(tlv.into_bytes())
        .expect_all())
}
