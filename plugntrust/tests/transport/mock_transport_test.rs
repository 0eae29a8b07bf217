use plugntrust::transport::{MockTransport, Transport};
use plugntrust::Error;

#[test]
fn sent_frames_are_recorded_in_order() {
    let mut mock = MockTransport::new();
    mock.send(&[0x01]).expect("send");
    mock.send(&[0x02, 0x03]).expect("send");
    assert_eq!(mock.sent, vec![vec![0x01], vec![0x02, 0x03]]);
    assert_eq!(mock.pop_sent(), Some(vec![0x02, 0x03]));
}

#[test]
fn responses_served_fifo_then_timeout() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0xA5]);
    mock.push_response(vec![0x5A]);
    assert_eq!(mock.receive(100).expect("receive"), vec![0xA5]);
    assert_eq!(mock.receive(100).expect("receive"), vec![0x5A]);
    assert!(matches!(mock.receive(100), Err(Error::Timeout)));
}

#[test]
fn injected_receive_failures() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x01]);
    mock.set_receive_failures(1);
    assert!(matches!(mock.receive(100), Err(Error::Timeout)));
    assert_eq!(mock.receive(100).expect("receive"), vec![0x01]);
}

#[test]
fn reset_preserves_queued_responses() {
    let mut mock = MockTransport::new();
    mock.push_response(vec![0x01]);
    mock.send(&[0xFF]).expect("send");
    mock.reset().expect("reset");
    assert!(mock.sent.is_empty());
    assert_eq!(mock.receive(100).expect("receive"), vec![0x01]);
}

#[test]
fn usable_as_boxed_trait_object() {
    let mut boxed: Box<dyn Transport> = Box::new(MockTransport::new());
    boxed.send(&[0x00]).expect("send");
    boxed.reset().expect("reset");
    boxed.delay_ms(0);
}
