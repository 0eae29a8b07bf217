// plugntrust/src/protocol/commands/mod.rs

pub mod crypto;
pub mod memory;
pub mod object;
pub mod random;
pub mod select;
pub mod version;

pub use crypto::{encode_cipher_one_shot, encode_write_aes_key};
pub use memory::encode_get_free_memory;
pub use object::{
    encode_check_object_exists, encode_delete_object, encode_read_id_list, encode_read_object,
    encode_write_binary,
};
pub use random::encode_get_random;
pub use select::{encode_select_applet, encode_select_card_manager};
pub use version::encode_get_version;

use crate::protocol::apdu::Apdu;
use crate::types::{CipherDirection, CipherMode, MemoryType, ObjectId};
use crate::Result;

/// High-level Command enum. New operations are added here with their
/// per-command APDU builder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// ISO SELECT of the card manager, optionally requesting response data
    SelectCardManager { with_response: bool },
    /// ISO SELECT of the Plug & Trust applet by AID
    SelectApplet,
    /// Applet version and configuration query
    GetVersion,
    /// Free byte count of one memory region
    GetFreeMemory { memory: MemoryType },
    /// On-chip random number generation
    GetRandom { len: u16 },
    /// Object existence check
    CheckObjectExists { id: ObjectId },
    /// Object deletion
    DeleteObject { id: ObjectId },
    /// Binary object read; `offset`/`len` of zero mean "from the start" /
    /// "everything"
    ReadObject { id: ObjectId, offset: u16, len: u16 },
    /// Binary object write; creates the object when absent
    WriteBinary {
        id: ObjectId,
        offset: u16,
        total_len: u16,
        data: Vec<u8>,
    },
    /// Page through the identifiers of all stored objects
    ReadIdList { offset: u16 },
    /// Store a 16-byte AES key object
    WriteAesKey { id: ObjectId, key: Vec<u8> },
    /// One-shot symmetric cipher operation with a stored key
    Cipher {
        key: ObjectId,
        mode: CipherMode,
        direction: CipherDirection,
        input: Vec<u8>,
    },
}

impl Command {
    /// Build the APDU for this command (header bytes plus TLV payload).
    pub fn to_apdu(&self) -> Result<Apdu> {
        match self {
            Self::SelectCardManager { with_response } => {
                Ok(encode_select_card_manager(*with_response))
            }
            Self::SelectApplet => Ok(encode_select_applet()),
            Self::GetVersion => Ok(encode_get_version()),
            Self::GetFreeMemory { memory } => encode_get_free_memory(*memory),
            Self::GetRandom { len } => encode_get_random(*len),
            Self::CheckObjectExists { id } => encode_check_object_exists(*id),
            Self::DeleteObject { id } => encode_delete_object(*id),
            Self::ReadObject { id, offset, len } => encode_read_object(*id, *offset, *len),
            Self::WriteBinary {
                id,
                offset,
                total_len,
                data,
            } => encode_write_binary(*id, *offset, *total_len, data),
            Self::ReadIdList { offset } => encode_read_id_list(*offset),
            Self::WriteAesKey { id, key } => encode_write_aes_key(*id, key),
            Self::Cipher {
                key,
                mode,
                direction,
                input,
            } => encode_cipher_one_shot(*key, *mode, *direction, input),
        }
    }

    /// Short operation name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectCardManager { .. } => "select_card_manager",
            Self::SelectApplet => "select_applet",
            Self::GetVersion => "get_version",
            Self::GetFreeMemory { .. } => "get_free_memory",
            Self::GetRandom { .. } => "get_random",
            Self::CheckObjectExists { .. } => "check_object_exists",
            Self::DeleteObject { .. } => "delete_object",
            Self::ReadObject { .. } => "read_object",
            Self::WriteBinary { .. } => "write_binary",
            Self::ReadIdList { .. } => "read_id_list",
            Self::WriteAesKey { .. } => "write_aes_key",
            Self::Cipher { .. } => "cipher",
        }
    }
}
