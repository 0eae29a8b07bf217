// plugntrust/src/protocol/commands/random.rs

use crate::constants::{CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_RANDOM, TAG_1};
use crate::protocol::apdu::Apdu;
use crate::tlv::TlvWriter;
use crate::Result;

/// Request `len` random bytes from the on-chip generator.
pub fn encode_get_random(len: u16) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u16(TAG_1, len)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_RANDOM)
        .with_payload(tlv.into_bytes())
        .expect_all())
}
