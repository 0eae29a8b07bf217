// plugntrust/src/session/mod.rs

//! Session handle that enforces the connect / select / operate ordering at
//! compile time through type states.

pub mod operations;

use std::marker::PhantomData;

use log::{debug, trace};

use crate::constants::{PCB_S_END_APDU_SESSION_REQ, PCB_S_SOFT_RESET_REQ};
use crate::protocol::codec;
use crate::protocol::responses::{self, Response};
use crate::protocol::{Apdu, Command};
use crate::transport::Transport;
use crate::types::{
    AppletVersion, AtrInfo, CipherDirection, CipherMode, MemoryType, ObjectId, ObjectPresence,
};
use crate::utils::timeout::DEFAULT_RECEIVE_TIMEOUT_MS;
use crate::{Error, Result};

/// Type-state markers
pub struct Idle;
pub struct Attached;
pub struct Ready;

/// Session over a secure element.
///
/// A session starts `Idle`, becomes `Attached` after [`connect`] has reset
/// the chip and captured its answer-to-reset, and `Ready` once the IoT
/// applet has been selected. Object and crypto operations exist only on
/// `Session<Ready>`.
///
/// [`connect`]: Session::connect
pub struct Session<State = Idle> {
    transport: Box<dyn Transport>,
    timeout_ms: u64,
    /// Host send-sequence bit, toggled after every I-block sent
    seq: bool,
    atr: Option<AtrInfo>,
    _state: PhantomData<State>,
}

impl Session<Idle> {
    /// Create an idle session over an existing transport.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            timeout_ms: DEFAULT_RECEIVE_TIMEOUT_MS,
            seq: false,
            atr: None,
            _state: PhantomData,
        }
    }

    /// Override the receive timeout in milliseconds.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Reset the chip and capture its answer-to-reset.
    pub fn connect(mut self) -> Result<Session<Attached>> {
        self.transport.reset()?;
        self.seq = false;
        let payload = self.exchange_supervisory(PCB_S_SOFT_RESET_REQ)?;
        let atr = responses::decode_atr(&payload)?;
        debug!(
            "connected: protocol v{}, vendor {:02x?}",
            atr.protocol_version, atr.vendor_id
        );
        self.atr = Some(atr);
        Ok(self.into_state())
    }
}

impl Session<Attached> {
    /// Answer-to-reset captured during [`Session::connect`].
    pub fn atr(&self) -> Option<&AtrInfo> {
        self.atr.as_ref()
    }

    /// Re-fetch the answer-to-reset without resetting the chip.
    pub fn refresh_atr(&mut self) -> Result<&AtrInfo> {
        let payload = self.exchange_supervisory(crate::constants::PCB_S_GET_ATR_REQ)?;
        let atr = responses::decode_atr(&payload)?;
        Ok(self.atr.insert(atr))
    }

    /// Select the ISO card manager. With `with_response` the file control
    /// information bytes are returned, otherwise the answer is empty.
    pub fn select_card_manager(&mut self, with_response: bool) -> Result<Vec<u8>> {
        let cmd = Command::SelectCardManager { with_response };
        match self.run(&cmd)? {
            Response::CardManagerSelected(data) => Ok(data),
            other => Err(unexpected_response(&cmd, &other)),
        }
    }

    /// Select the IoT applet and move to the `Ready` state. The selection
    /// answer carries the applet version.
    pub fn select_applet(mut self) -> Result<(Session<Ready>, AppletVersion)> {
        let cmd = Command::SelectApplet;
        let version = match self.run(&cmd)? {
            Response::AppletSelected(version) => version,
            other => return Err(unexpected_response(&cmd, &other)),
        };
        debug!("applet selected, version {}", version);
        Ok((self.into_state(), version))
    }
}

impl Session<Ready> {
    /// Execute a command and return the parsed response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        self.run(cmd)
    }

    /// Answer-to-reset captured during [`Session::connect`].
    pub fn atr(&self) -> Option<&AtrInfo> {
        self.atr.as_ref()
    }

    /// Applet version block via the dedicated version query.
    pub fn applet_info(&mut self) -> Result<AppletVersion> {
        operations::info::get_applet_info(self)
    }

    /// Free byte count of a memory region.
    pub fn free_memory(&mut self, memory: MemoryType) -> Result<u16> {
        operations::info::get_free_memory(self, memory)
    }

    /// `len` bytes from the on-chip random generator.
    pub fn random(&mut self, len: u16) -> Result<Vec<u8>> {
        operations::info::get_random(self, len)
    }

    /// Whether a secure object with `id` is present.
    pub fn object_exists(&mut self, id: ObjectId) -> Result<ObjectPresence> {
        operations::object::check_object_exists(self, id)
    }

    /// Delete the secure object `id`.
    pub fn delete_object(&mut self, id: ObjectId) -> Result<()> {
        operations::object::delete_object(self, id)
    }

    /// Read stored bytes of binary object `id`. Zero `offset` and `len`
    /// read the whole object.
    pub fn read_object(&mut self, id: ObjectId, offset: u16, len: u16) -> Result<Vec<u8>> {
        operations::object::read_object(self, id, offset, len)
    }

    /// Write `data` into binary object `id`, creating it with capacity
    /// `total_len` when absent.
    pub fn write_binary_object(
        &mut self,
        id: ObjectId,
        offset: u16,
        total_len: u16,
        data: &[u8],
    ) -> Result<()> {
        operations::object::write_binary_object(self, id, offset, total_len, data)
    }

    /// Identifiers of all stored objects.
    pub fn object_id_list(&mut self) -> Result<Vec<ObjectId>> {
        operations::object::object_id_list(self)
    }

    /// Store a 16-byte AES key under `id`.
    pub fn write_aes_key(&mut self, id: ObjectId, key: &[u8]) -> Result<()> {
        operations::crypto::write_aes_key(self, id, key)
    }

    /// One-shot cipher operation with the stored key `key`.
    pub fn cipher(
        &mut self,
        key: ObjectId,
        mode: CipherMode,
        direction: CipherDirection,
        input: &[u8],
    ) -> Result<Vec<u8>> {
        operations::crypto::cipher(self, key, mode, direction, input)
    }

    /// One-shot encryption convenience wrapper.
    pub fn encrypt(&mut self, key: ObjectId, mode: CipherMode, plaintext: &[u8]) -> Result<Vec<u8>> {
        operations::crypto::encrypt(self, key, mode, plaintext)
    }

    /// One-shot decryption convenience wrapper.
    pub fn decrypt(
        &mut self,
        key: ObjectId,
        mode: CipherMode,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        operations::crypto::decrypt(self, key, mode, ciphertext)
    }

    /// Soft-reset the chip and drop back to `Attached`. The applet must be
    /// selected again before further object operations.
    pub fn reset(mut self) -> Result<Session<Attached>> {
        self.seq = false;
        let payload = self.exchange_supervisory(PCB_S_SOFT_RESET_REQ)?;
        self.atr = Some(responses::decode_atr(&payload)?);
        debug!("soft reset, session back to attached");
        Ok(self.into_state())
    }

    /// End the session and return to `Idle`, keeping the transport.
    pub fn close(mut self) -> Result<Session<Idle>> {
        self.exchange_supervisory(PCB_S_END_APDU_SESSION_REQ)?;
        self.seq = false;
        self.atr = None;
        debug!("session closed");
        Ok(self.into_state())
    }
}

impl<State> Session<State> {
    fn into_state<Next>(self) -> Session<Next> {
        Session {
            transport: self.transport,
            timeout_ms: self.timeout_ms,
            seq: self.seq,
            atr: self.atr,
            _state: PhantomData,
        }
    }

    /// One S-block request/response exchange, returning the response
    /// information field.
    fn exchange_supervisory(&mut self, pcb: u8) -> Result<Vec<u8>> {
        let wire = codec::encode_supervisory_frame(pcb)?;
        trace!("> {}", crate::utils::hex::bytes_to_hex_spaced(&wire));
        self.transport.send(&wire)?;
        let raw = self.transport.receive(self.timeout_ms)?;
        trace!("< {}", crate::utils::hex::bytes_to_hex_spaced(&raw));
        codec::decode_supervisory_frame(&raw, pcb)
    }

    /// One I-block exchange followed by the end-of-APDU-session S-block
    /// exchange, returning the response body with the status word already
    /// checked and stripped.
    fn transceive(&mut self, apdu: &Apdu) -> Result<Vec<u8>> {
        let wire = codec::encode_information_frame(self.seq, apdu)?;
        trace!("> {}", crate::utils::hex::bytes_to_hex_spaced(&wire));
        self.transport.send(&wire)?;
        self.seq = !self.seq;

        let raw = self.transport.receive(self.timeout_ms)?;
        trace!("< {}", crate::utils::hex::bytes_to_hex_spaced(&raw));
        let data = codec::decode_information_frame(&raw)?;
        let (body, sw) = responses::split_status(&data)?;
        let body = body.to_vec();

        // The exchange is closed even when the command failed, so the chip
        // is ready for the next APDU either way.
        self.exchange_supervisory(PCB_S_END_APDU_SESSION_REQ)?;

        if !sw.is_success() {
            return Err(Error::Status(sw));
        }
        Ok(body)
    }

    fn run(&mut self, cmd: &Command) -> Result<Response> {
        debug!("executing {}", cmd.name());
        let apdu = cmd.to_apdu()?;
        let body = self.transceive(&apdu)?;
        Response::decode(cmd, &body)
    }
}

pub(crate) fn unexpected_response(cmd: &Command, response: &Response) -> Error {
    Error::FrameFormat(format!(
        "response {:?} does not answer {}",
        response,
        cmd.name()
    ))
}
