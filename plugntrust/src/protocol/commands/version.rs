// plugntrust/src/protocol/commands/version.rs

use crate::constants::{CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_VERSION};
use crate::protocol::apdu::Apdu;

/// Applet version query. No payload; the version info comes back as TLV.
pub fn encode_get_version() -> Apdu {
    Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_VERSION).expect_all()
}
