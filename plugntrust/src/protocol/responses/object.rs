// plugntrust/src/protocol/responses/object.rs

use crate::constants::{RESULT_OBJECT_ABSENT, RESULT_OBJECT_EXISTS, TAG_1, TAG_2};
use crate::tlv;
use crate::types::{ObjectId, ObjectPresence};
use crate::{Error, Result};

/// More-indicator values in an id-list answer.
const LIST_MORE: u8 = 0x01;
const LIST_DONE: u8 = 0x02;

pub fn decode_presence(body: &[u8]) -> Result<ObjectPresence> {
    match tlv::get_u8(body, TAG_1)? {
        RESULT_OBJECT_EXISTS => Ok(ObjectPresence::Exists),
        RESULT_OBJECT_ABSENT => Ok(ObjectPresence::DoesNotExist),
        other => Err(Error::FrameFormat(format!(
            "unknown presence indicator {:#04x}",
            other
        ))),
    }
}

pub fn decode_object_data(body: &[u8]) -> Result<Vec<u8>> {
    Ok(tlv::get_bytes(body, TAG_1)?.to_vec())
}

/// Id-list answer: TAG_1 carries a more-indicator, TAG_2 the identifiers as
/// packed 4-byte big-endian words.
pub fn decode_id_list(body: &[u8]) -> Result<(bool, Vec<ObjectId>)> {
    let more = match tlv::get_u8(body, TAG_1)? {
        LIST_MORE => true,
        LIST_DONE => false,
        other => Err(Error::FrameFormat(format!(
            "unknown more indicator {:#04x}",
            other
        )))?,
    };
    let raw = tlv::get_bytes(body, TAG_2)?;
    if raw.len() % 4 != 0 {
        return Err(Error::InvalidLength {
            expected: raw.len().next_multiple_of(4),
            actual: raw.len(),
        });
    }
    let ids = raw.chunks_exact(4).map(ObjectId::try_from).collect::<Result<Vec<_>>>()?;
    Ok((more, ids))
}
