// plugntrust/src/protocol/responses/mod.rs

pub mod atr;
pub mod crypto;
pub mod memory;
pub mod object;
pub mod random;
pub mod select;
pub mod version;

pub use atr::decode_atr;
pub use crypto::decode_cipher_output;
pub use memory::decode_free_memory;
pub use object::{decode_id_list, decode_object_data, decode_presence};
pub use random::decode_random;
pub use select::decode_select_applet;
pub use version::decode_version;

use crate::protocol::commands::Command;
use crate::types::{AppletVersion, ObjectId, ObjectPresence, StatusWord};
use crate::{Error, Result};

/// Split an I-block response body into payload and trailing status word.
pub fn split_status(data: &[u8]) -> Result<(&[u8], StatusWord)> {
    if data.len() < 2 {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: data.len(),
        });
    }
    let (body, sw) = data.split_at(data.len() - 2);
    Ok((body, StatusWord::from_be_bytes([sw[0], sw[1]])))
}

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here. Decoders see
/// only the TLV body; the status word has already been checked by the
/// session exchange path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Raw file-control bytes from a card manager selection (empty when no
    /// response was requested)
    CardManagerSelected(Vec<u8>),
    AppletSelected(AppletVersion),
    Version(AppletVersion),
    /// Free byte count of the queried memory region
    FreeMemory(u16),
    Random(Vec<u8>),
    Presence(ObjectPresence),
    /// Operations with no response data beyond the status word
    Done,
    ObjectData(Vec<u8>),
    IdList { more: bool, ids: Vec<ObjectId> },
    CipherOutput(Vec<u8>),
}

impl Response {
    /// Decode the response body for the command that produced it.
    pub fn decode(cmd: &Command, body: &[u8]) -> Result<Self> {
        match cmd {
            Command::SelectCardManager { .. } => Ok(Self::CardManagerSelected(body.to_vec())),
            Command::SelectApplet => Ok(Self::AppletSelected(select::decode_select_applet(body)?)),
            Command::GetVersion => Ok(Self::Version(version::decode_version(body)?)),
            Command::GetFreeMemory { .. } => {
                Ok(Self::FreeMemory(memory::decode_free_memory(body)?))
            }
            Command::GetRandom { .. } => Ok(Self::Random(random::decode_random(body)?)),
            Command::CheckObjectExists { .. } => {
                Ok(Self::Presence(object::decode_presence(body)?))
            }
            Command::DeleteObject { .. }
            | Command::WriteBinary { .. }
            | Command::WriteAesKey { .. } => Ok(Self::Done),
            Command::ReadObject { .. } => Ok(Self::ObjectData(object::decode_object_data(body)?)),
            Command::ReadIdList { .. } => {
                let (more, ids) = object::decode_id_list(body)?;
                Ok(Self::IdList { more, ids })
            }
            Command::Cipher { .. } => Ok(Self::CipherOutput(crypto::decode_cipher_output(body)?)),
        }
    }
}
