#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use plugntrust::test_support::{ready_mock_session, seed_exchange};

// The largest random request a single response frame can answer: the frame
// payload ceiling (253) minus the TLV header (2) and the status word (2).
const MAX_SINGLE_FRAME_RANDOM: u16 = 249;

#[test]
fn random_returns_exactly_the_requested_length() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    for len in [1u16, 2, 16, 64, 128, MAX_SINGLE_FRAME_RANDOM] {
        let body = fixtures::data_body(&vec![0x5Au8; len as usize]);
        seed_exchange(&mock, &body, fixtures::SW_NO_ERROR);
        let bytes = session.random(len).expect("random");
        assert_eq!(bytes.len(), len as usize, "len {}", len);
    }
}

#[test]
fn consecutive_draws_are_independent() {
    let (mut session, mock) = ready_mock_session().expect("ready");
    seed_exchange(&mock, &fixtures::data_body(&[0x11; 8]), fixtures::SW_NO_ERROR);
    seed_exchange(&mock, &fixtures::data_body(&[0x22; 8]), fixtures::SW_NO_ERROR);

    let first = session.random(8).expect("random");
    let second = session.random(8).expect("random");
    assert_ne!(first, second);
}
