// plugntrust/src/protocol/responses/select.rs

use crate::types::AppletVersion;
use crate::Result;

/// Applet selection answers with its version block as raw bytes (no TLV
/// envelope, unlike the dedicated version query).
pub fn decode_select_applet(body: &[u8]) -> Result<AppletVersion> {
    AppletVersion::parse(body)
}
