#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use plugntrust::constants::{NAD_HOST_TO_SE, PCB_S_SOFT_RESET_REQ, TAG_1};
use plugntrust::test_support::{
    atr_frame, attached_mock_session, ready_mock_session, seed_exchange,
};
use plugntrust::types::MemoryType;
use plugntrust::{Error, Session};

#[test]
fn connect_resets_transport_and_sends_soft_reset() {
    let (_session, mock) = attached_mock_session().expect("connect");
    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0][0], NAD_HOST_TO_SE);
    assert_eq!(sent[0][1], PCB_S_SOFT_RESET_REQ);
}

#[test]
fn attached_session_exposes_atr() {
    let (session, _mock) = attached_mock_session().expect("connect");
    let atr = session.atr().expect("atr");
    assert_eq!(atr.protocol_version, 0x01);
    assert_eq!(atr.physical_layer_id, 0x02);
}

#[test]
fn select_applet_returns_version() {
    let (session, mock) = attached_mock_session().expect("connect");
    seed_exchange(&mock, &[0x03, 0x01, 0x01, 0x6F, 0xFF, 0x01, 0x0B], 0x9000);
    let (_ready, version) = session.select_applet().expect("select");
    assert_eq!(version.to_string(), "3.1.1");
}

#[test]
fn every_operation_closes_its_apdu_session() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    seed_exchange(&mock, &[TAG_1, 2, 0x10, 0x00], 0x9000);
    session.free_memory(MemoryType::Persistent).expect("memory");

    // Each exchange ends with an S-block: PCB top two bits are 11
    let sent = mock.sent();
    let last = sent.last().expect("frames sent");
    assert_eq!(last[1] & 0xC0, 0xC0);
    assert_eq!(mock.remaining_responses(), 0);
}

#[test]
fn error_status_maps_to_status_error() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    seed_exchange(&mock, &[], fixtures::SW_OBJECT_NOT_FOUND);
    match session.delete_object(fixtures::sample_object_id()) {
        Err(Error::Status(sw)) => assert_eq!(sw.as_u16(), fixtures::SW_OBJECT_NOT_FOUND),
        other => panic!("expected status error, got: {:?}", other),
    }
}

#[test]
fn timeout_bubbles_up_from_transport() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    mock.set_receive_failures(1);
    assert!(matches!(
        session.random(8),
        Err(Error::Timeout)
    ));
}

#[test]
fn every_operation_surfaces_error_status_words() {
    use plugntrust::types::{CipherDirection, CipherMode};
    let (mut session, mock) = ready_mock_session().expect("ready");
    let id = fixtures::sample_object_id();
    let sw = 0x6985u16; // conditions of use not satisfied

    let ops: Vec<Box<dyn FnMut(&mut plugntrust::Session<plugntrust::Ready>) -> bool>> = vec![
        Box::new(|s| s.applet_info().is_err()),
        Box::new(|s| s.free_memory(MemoryType::Persistent).is_err()),
        Box::new(|s| s.random(8).is_err()),
        Box::new(move |s| s.object_exists(id).is_err()),
        Box::new(move |s| s.delete_object(id).is_err()),
        Box::new(move |s| s.read_object(id, 0, 0).is_err()),
        Box::new(move |s| s.write_binary_object(id, 0, 4, b"data").is_err()),
        Box::new(|s| s.object_id_list().is_err()),
        Box::new(move |s| s.write_aes_key(id, &[0u8; 16]).is_err()),
        Box::new(move |s| {
            s.cipher(id, CipherMode::AesEcbNoPad, CipherDirection::Encrypt, &[0u8; 16])
                .is_err()
        }),
    ];

    for (i, mut op) in ops.into_iter().enumerate() {
        seed_exchange(&mock, &[], sw);
        assert!(op(&mut session), "operation #{} ignored the status word", i);
    }
    assert_eq!(mock.remaining_responses(), 0);
}

#[test]
fn reset_returns_to_attached_state() {
    let (session, mock) = ready_mock_session().expect("ready");
    mock.push_response(atr_frame());
    let attached = session.reset().expect("reset");
    assert!(attached.atr().is_some());

    // The attached session can select the applet again
    seed_exchange(&mock, &[0x03, 0x01, 0x01, 0x6F, 0xFF, 0x01, 0x0B], 0x9000);
    assert!(attached.select_applet().is_ok());
}

#[test]
fn idle_session_owns_transport_until_connect() {
    let mock = plugntrust::test_support::SharedMock::new();
    let session: Session = Session::new(mock.boxed());
    // Nothing is sent before connect
    assert!(mock.sent().is_empty());
    drop(session);
}
