//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup and wire-frame fixtures so
//! tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{
    NAD_SE_TO_HOST, PCB_I_BLOCK, PCB_I_SEQ, PCB_S_RESPONSE, PCB_S_SOFT_RESET_REQ,
};
use crate::protocol::Frame;
use crate::session::{Attached, Ready, Session};
use crate::transport::{MockTransport, Transport};
use crate::{transport, Result};

/// Build a MockTransport pre-seeded with the given wire frames and return
/// it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock(responses: Vec<Vec<u8>>) -> Box<dyn transport::Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Mock transport handle that stays inspectable after a Session takes
/// ownership of the boxed trait object.
#[doc(hidden)]
#[derive(Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn remaining_responses(&self) -> usize {
        self.inner.borrow().responses.len()
    }

    pub fn set_receive_failures(&self, n: usize) {
        self.inner.borrow_mut().set_receive_failures(n);
    }
}

impl Transport for SharedMock {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(timeout_ms)
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }

    fn delay_ms(&mut self, _ms: u64) {}
}

/// Sample answer-to-reset payload used by fixtures.
#[doc(hidden)]
pub fn sample_atr() -> Vec<u8> {
    let mut atr = vec![0x01];
    atr.extend_from_slice(&[0x04, 0x9A, 0x01, 0x01, 0x01]); // vendor id
    atr.extend_from_slice(&[0x03, 0x30, 0xFE, 0x02]); // dll parameters
    atr.push(0x02); // physical layer id
    atr.extend_from_slice(&[0x04, 0x0B, 0x48, 0x00, 0x64]); // physical params
    atr.extend_from_slice(&[0x02, 0x5A, 0x5A]); // historical bytes
    atr
}

fn device_frame(pcb: u8, payload: &[u8]) -> Vec<u8> {
    // Fixture frames are always well below the frame payload ceiling
    Frame::new(NAD_SE_TO_HOST, pcb, payload.to_vec())
        .encode()
        .expect("fixture frame too large")
}

/// S-block response frame acknowledging the request with PCB `request_pcb`.
#[doc(hidden)]
pub fn supervisory_ack_frame(request_pcb: u8) -> Vec<u8> {
    device_frame(request_pcb | PCB_S_RESPONSE, &[])
}

/// Soft-reset answer frame carrying [`sample_atr`].
#[doc(hidden)]
pub fn atr_frame() -> Vec<u8> {
    device_frame(PCB_S_SOFT_RESET_REQ | PCB_S_RESPONSE, &sample_atr())
}

/// Device I-block frame carrying `body` followed by the status word `sw`.
#[doc(hidden)]
pub fn response_frame(seq: bool, body: &[u8], sw: u16) -> Vec<u8> {
    let pcb = if seq { PCB_I_BLOCK | PCB_I_SEQ } else { PCB_I_BLOCK };
    let mut payload = body.to_vec();
    payload.extend_from_slice(&sw.to_be_bytes());
    device_frame(pcb, &payload)
}

/// Queue the two frames every successful APDU exchange consumes: the
/// I-block answer and the end-session acknowledgement.
#[doc(hidden)]
pub fn seed_exchange(mock: &SharedMock, body: &[u8], sw: u16) {
    mock.push_response(response_frame(false, body, sw));
    mock.push_response(supervisory_ack_frame(
        crate::constants::PCB_S_END_APDU_SESSION_REQ,
    ));
}

/// Connected session backed by a [`SharedMock`] with the answer-to-reset
/// already consumed.
#[doc(hidden)]
pub fn attached_mock_session() -> Result<(Session<Attached>, SharedMock)> {
    let mock = SharedMock::new();
    mock.push_response(atr_frame());
    let session = Session::new(mock.boxed()).connect()?;
    Ok((session, mock))
}

/// Session with the applet already selected, backed by a [`SharedMock`].
#[doc(hidden)]
pub fn ready_mock_session() -> Result<(Session<Ready>, SharedMock)> {
    let (session, mock) = attached_mock_session()?;
    seed_exchange(&mock, &[0x03, 0x01, 0x01, 0x6F, 0xFF, 0x01, 0x0B], 0x9000);
    let (session, _version) = session.select_applet()?;
    Ok((session, mock))
}
