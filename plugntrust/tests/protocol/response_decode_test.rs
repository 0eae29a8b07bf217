#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use plugntrust::protocol::responses::{decode_atr, split_status, Response};
use plugntrust::protocol::Command;
use plugntrust::types::{MemoryType, ObjectPresence};
use plugntrust::{Error, ObjectId};

#[test]
fn status_word_is_split_from_body() {
    let mut data = fixtures::version_body();
    data.extend_from_slice(&fixtures::SW_NO_ERROR.to_be_bytes());
    let (body, sw) = split_status(&data).expect("split");
    assert_eq!(body, &fixtures::version_body()[..]);
    assert!(sw.is_success());
}

#[test]
fn version_response_decodes_to_applet_version() {
    let resp = Response::decode(&Command::GetVersion, &fixtures::version_body()).expect("decode");
    match resp {
        Response::Version(v) => {
            assert_eq!((v.major, v.minor, v.patch), (3, 1, 1));
            assert_eq!(v.applet_config, 0x6FFF);
            assert_eq!(v.secure_box, 0x010B);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn presence_response_tri_state() {
    let id = fixtures::sample_object_id();
    let cmd = Command::CheckObjectExists { id };

    let exists = Response::decode(&cmd, &fixtures::presence_body(true)).expect("decode");
    assert_eq!(exists, Response::Presence(ObjectPresence::Exists));

    let absent = Response::decode(&cmd, &fixtures::presence_body(false)).expect("decode");
    assert_eq!(absent, Response::Presence(ObjectPresence::DoesNotExist));

    // Any other indicator byte is a protocol violation, not a guess
    let bogus = [plugntrust::constants::TAG_1, 1, 0x7F];
    assert!(matches!(
        Response::decode(&cmd, &bogus),
        Err(Error::FrameFormat(_))
    ));
}

#[test]
fn free_memory_response() {
    let cmd = Command::GetFreeMemory {
        memory: MemoryType::Persistent,
    };
    let body = [plugntrust::constants::TAG_1, 2, 0x12, 0x34];
    assert_eq!(
        Response::decode(&cmd, &body).expect("decode"),
        Response::FreeMemory(0x1234)
    );
}

#[test]
fn object_data_response() {
    let cmd = Command::ReadObject {
        id: fixtures::sample_object_id(),
        offset: 0,
        len: 0,
    };
    let resp = Response::decode(&cmd, &fixtures::data_body(b"MikroE")).expect("decode");
    assert_eq!(resp, Response::ObjectData(b"MikroE".to_vec()));
}

#[test]
fn id_list_response_with_more_pages() {
    let ids = [ObjectId::new(0x0100), ObjectId::new(0x2000_0001)];
    let body = fixtures::id_list_body(true, &ids);
    match Response::decode(&Command::ReadIdList { offset: 0 }, &body).expect("decode") {
        Response::IdList { more, ids: got } => {
            assert!(more);
            assert_eq!(got, ids.to_vec());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn missing_tag_surfaces_as_tag_not_found() {
    let cmd = Command::GetRandom { len: 4 };
    assert!(matches!(
        Response::decode(&cmd, &[]),
        Err(Error::TagNotFound { .. })
    ));
}

#[test]
fn atr_sections_are_length_prefixed() {
    let mut atr = vec![0x01];
    atr.extend_from_slice(&[0x04, 0x9A, 0x01, 0x02, 0x03]);
    atr.push(0x00); // empty dll section
    atr.push(0x02); // physical layer id
    atr.push(0x00); // empty physical section
    atr.push(0x01); // one historical byte
    atr.push(0x42);
    let info = decode_atr(&atr).expect("decode");
    assert!(info.dll_params.is_empty());
    assert_eq!(info.historical, vec![0x42]);
}
