#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use plugntrust::test_support::{ready_mock_session, seed_exchange};
use plugntrust::types::{CipherDirection, CipherMode};
use plugntrust::{Error, ObjectId};

#[test]
fn aes_key_provisioning() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    seed_exchange(&mock, &[], fixtures::SW_NO_ERROR);
    session
        .write_aes_key(fixtures::sample_object_id(), &fixtures::sample_aes_key())
        .expect("write key");
    assert_eq!(mock.remaining_responses(), 0);
}

#[test]
fn wrong_key_length_fails_without_bus_traffic() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    let frames_before = mock.sent().len();
    let result = session.write_aes_key(fixtures::sample_object_id(), &[0u8; 32]);
    assert!(matches!(result, Err(Error::InvalidLength { .. })));
    assert_eq!(mock.sent().len(), frames_before);
}

// Encrypt then decrypt through the mock: the chip is simulated by seeding
// the ciphertext for the first exchange and the plaintext for the second.
#[test]
fn cipher_round_trip_through_mock() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    let key = ObjectId::new(0x0100);
    let plaintext = [0x11u8; 16];
    let ciphertext = [0x99u8; 16];

    seed_exchange(&mock, &fixtures::data_body(&ciphertext), fixtures::SW_NO_ERROR);
    seed_exchange(&mock, &fixtures::data_body(&plaintext), fixtures::SW_NO_ERROR);

    let encrypted = session
        .encrypt(key, CipherMode::AesCbcNoPad, &plaintext)
        .expect("encrypt");
    assert_eq!(encrypted, ciphertext.to_vec());

    let decrypted = session
        .decrypt(key, CipherMode::AesCbcNoPad, &encrypted)
        .expect("decrypt");
    assert_eq!(decrypted, plaintext.to_vec());
}

#[test]
fn explicit_direction_matches_convenience_wrappers() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    let key = ObjectId::new(0x0100);
    let output = [0xABu8; 16];

    seed_exchange(&mock, &fixtures::data_body(&output), fixtures::SW_NO_ERROR);
    seed_exchange(&mock, &fixtures::data_body(&output), fixtures::SW_NO_ERROR);

    let via_cipher = session
        .cipher(key, CipherMode::AesEcbNoPad, CipherDirection::Encrypt, &[0u8; 16])
        .expect("cipher");
    let via_encrypt = session
        .encrypt(key, CipherMode::AesEcbNoPad, &[0u8; 16])
        .expect("encrypt");
    assert_eq!(via_cipher, via_encrypt);

    // Both exchanges produced identical APDUs apart from the sequence bit
    let sent = mock.sent();
    let a = &sent[sent.len() - 4];
    let b = &sent[sent.len() - 2];
    assert_eq!(a[3..a.len() - 2], b[3..b.len() - 2]);
}
