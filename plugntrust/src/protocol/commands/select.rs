// plugntrust/src/protocol/commands/select.rs

use crate::constants::{APPLET_AID, CLA_ISO, INS_SELECT};
use crate::protocol::apdu::Apdu;

/// ISO SELECT with an empty AID, addressing the card manager. When
/// `with_response` is set the command requests the manager's FCI bytes back.
pub fn encode_select_card_manager(with_response: bool) -> Apdu {
    let apdu = Apdu::new(CLA_ISO, INS_SELECT, 0x04, 0x00);
    if with_response {
        apdu.expect_all()
    } else {
        apdu
    }
}

/// ISO SELECT of the Plug & Trust applet by its AID. The response carries
/// the applet version info.
pub fn encode_select_applet() -> Apdu {
    Apdu::new(CLA_ISO, INS_SELECT, 0x04, 0x00)
        .with_payload(APPLET_AID.to_vec())
        .expect_all()
}
