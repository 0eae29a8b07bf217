#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use plugntrust::constants::*;
use plugntrust::protocol::{Apdu, Command};
use plugntrust::types::{CipherDirection, CipherMode, MemoryType};
use plugntrust::{Error, ObjectId};

#[test]
fn select_card_manager_is_iso_class() {
    let apdu = Command::SelectCardManager {
        with_response: false,
    }
    .to_apdu()
    .expect("encode");
    assert_eq!(apdu.cla, CLA_ISO);
    assert_eq!(apdu.ins, INS_SELECT);
    assert_eq!(apdu.p1, 0x04);
    assert!(apdu.payload.is_empty());
    assert_eq!(apdu.le, None);

    let with_data = Command::SelectCardManager {
        with_response: true,
    }
    .to_apdu()
    .expect("encode");
    assert_eq!(with_data.le, Some(plugntrust::protocol::apdu::LE_READ_ALL));
}

#[test]
fn select_applet_carries_aid() {
    let apdu = Command::SelectApplet.to_apdu().expect("encode");
    assert_eq!(apdu.payload, APPLET_AID.to_vec());
    assert_eq!(apdu.le, Some(plugntrust::protocol::apdu::LE_READ_ALL));
}

#[test]
fn applet_commands_use_proprietary_class() {
    let commands = [
        Command::GetVersion,
        Command::GetFreeMemory {
            memory: MemoryType::TransientReset,
        },
        Command::GetRandom { len: 32 },
        Command::CheckObjectExists {
            id: fixtures::sample_object_id(),
        },
        Command::DeleteObject {
            id: fixtures::sample_object_id(),
        },
        Command::ReadIdList { offset: 0 },
    ];
    for cmd in &commands {
        let apdu = cmd.to_apdu().expect("encode");
        assert_eq!(apdu.cla, CLA_DEFAULT, "{}", cmd.name());
    }
}

#[test]
fn write_then_read_use_matching_object_tlv() {
    let id = fixtures::sample_object_id();
    let write = Command::WriteBinary {
        id,
        offset: 0,
        total_len: 6,
        data: b"MikroE".to_vec(),
    }
    .to_apdu()
    .expect("encode");
    let read = Command::ReadObject {
        id,
        offset: 0,
        len: 0,
    }
    .to_apdu()
    .expect("encode");

    // Both start with the same TAG_1 object identifier TLV
    assert_eq!(write.payload[..6], read.payload[..6]);
    assert_eq!(write.payload[0], TAG_1);
}

#[test]
fn oversized_tlv_payload_is_rejected_at_encode_time() {
    // A 300-byte value cannot be described by the one-byte TLV length
    let result = Command::WriteBinary {
        id: fixtures::sample_object_id(),
        offset: 0,
        total_len: 300,
        data: vec![0u8; 300],
    }
    .to_apdu();
    assert!(matches!(result, Err(Error::InvalidLength { .. })));

    // A value that fits its length byte but not the payload budget hits
    // the capacity check instead
    let result = Command::WriteBinary {
        id: fixtures::sample_object_id(),
        offset: 0,
        total_len: 250,
        data: vec![0u8; 250],
    }
    .to_apdu();
    assert!(matches!(result, Err(Error::BufferOverflow { .. })));
}

#[test]
fn cipher_command_encodes_key_mode_input() {
    let apdu = Command::Cipher {
        key: ObjectId::new(0x0100),
        mode: CipherMode::AesCbcNoPad,
        direction: CipherDirection::Encrypt,
        input: vec![0x42; 16],
    }
    .to_apdu()
    .expect("encode");
    assert_eq!(apdu.ins, INS_CRYPTO);
    assert_eq!(apdu.p1, P1_CIPHER);
    assert_eq!(apdu.p2, P2_ENCRYPT_ONESHOT);
    assert_eq!(apdu.payload[0], TAG_1);
    assert_eq!(apdu.payload[6..9], [TAG_2, 1, CipherMode::AesCbcNoPad as u8]);
    assert_eq!(apdu.payload[9], TAG_3);
}

#[test]
fn encoded_apdu_fits_declared_length() {
    let apdu = Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_RANDOM)
        .with_payload(vec![TAG_1, 2, 0x00, 0xFF])
        .expect_all();
    let bytes = apdu.encode().expect("encode");
    assert_eq!(bytes.len(), apdu.serialized_len());
}
