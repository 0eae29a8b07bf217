// plugntrust/src/protocol/responses/memory.rs

use crate::constants::TAG_1;
use crate::tlv;
use crate::Result;

/// Free byte count of the queried region, big-endian u16 in TAG_1.
pub fn decode_free_memory(body: &[u8]) -> Result<u16> {
    tlv::get_u16(body, TAG_1)
}
