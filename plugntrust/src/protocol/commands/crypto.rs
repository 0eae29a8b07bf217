// plugntrust/src/protocol/commands/crypto.rs

use crate::constants::*;
use crate::protocol::apdu::Apdu;
use crate::tlv::TlvWriter;
use crate::types::{CipherDirection, CipherMode, ObjectId};
use crate::{Error, Result};

/// Store a 16-byte AES key object under `id`.
pub fn encode_write_aes_key(id: ObjectId, key: &[u8]) -> Result<Apdu> {
    if key.len() != AES_KEY_LEN {
        return Err(Error::InvalidLength {
            expected: AES_KEY_LEN,
            actual: key.len(),
        });
    }
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, id.as_u32())?;
    tlv.push_bytes(TAG_3, key)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_WRITE, P1_AES, P2_DEFAULT).with_payload(tlv.into_bytes()))
}

/// One-shot symmetric cipher operation over `input` with a stored key.
/// The direction selects the P2 byte; the mode rides in a TLV.
pub fn encode_cipher_one_shot(
    key: ObjectId,
    mode: CipherMode,
    direction: CipherDirection,
    input: &[u8],
) -> Result<Apdu> {
    let p2 = match direction {
        CipherDirection::Encrypt => P2_ENCRYPT_ONESHOT,
        CipherDirection::Decrypt => P2_DECRYPT_ONESHOT,
    };
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, key.as_u32())?;
    tlv.push_u8(TAG_2, mode as u8)?;
    tlv.push_bytes(TAG_3, input)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_CRYPTO, P1_CIPHER, p2)
        .with_payload(tlv.into_bytes())
        .expect_all())
}
