// plugntrust/src/protocol/responses/version.rs

use crate::constants::TAG_1;
use crate::tlv;
use crate::types::AppletVersion;
use crate::Result;

/// The version query wraps the 7-byte version block in a TLV.
pub fn decode_version(body: &[u8]) -> Result<AppletVersion> {
    let block = tlv::get_bytes(body, TAG_1)?;
    AppletVersion::parse(block)
}
