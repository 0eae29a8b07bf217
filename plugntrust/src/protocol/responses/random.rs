// plugntrust/src/protocol/responses/random.rs

use crate::constants::TAG_1;
use crate::tlv;
use crate::Result;

pub fn decode_random(body: &[u8]) -> Result<Vec<u8>> {
    Ok(tlv::get_bytes(body, TAG_1)?.to_vec())
}
