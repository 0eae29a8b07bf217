// plugntrust/src/session/operations/object.rs

use crate::protocol::{Command, Response};
use crate::session::{unexpected_response, Ready, Session};
use crate::types::{ObjectId, ObjectPresence};
use crate::{Error, Result};

pub fn check_object_exists(session: &mut Session<Ready>, id: ObjectId) -> Result<ObjectPresence> {
    let cmd = Command::CheckObjectExists { id };
    match session.execute(&cmd)? {
        Response::Presence(presence) => Ok(presence),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn delete_object(session: &mut Session<Ready>, id: ObjectId) -> Result<()> {
    let cmd = Command::DeleteObject { id };
    match session.execute(&cmd)? {
        Response::Done => Ok(()),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn read_object(
    session: &mut Session<Ready>,
    id: ObjectId,
    offset: u16,
    len: u16,
) -> Result<Vec<u8>> {
    let cmd = Command::ReadObject { id, offset, len };
    match session.execute(&cmd)? {
        Response::ObjectData(data) => Ok(data),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn write_binary_object(
    session: &mut Session<Ready>,
    id: ObjectId,
    offset: u16,
    total_len: u16,
    data: &[u8],
) -> Result<()> {
    let cmd = Command::WriteBinary {
        id,
        offset,
        total_len,
        data: data.to_vec(),
    };
    match session.execute(&cmd)? {
        Response::Done => Ok(()),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

/// Collect the identifiers of every stored object, following the
/// more-indicator across as many list exchanges as the chip needs.
pub fn object_id_list(session: &mut Session<Ready>) -> Result<Vec<ObjectId>> {
    let mut all = Vec::new();
    loop {
        let cmd = Command::ReadIdList {
            offset: all.len() as u16,
        };
        let (more, ids) = match session.execute(&cmd)? {
            Response::IdList { more, ids } => (more, ids),
            other => return Err(unexpected_response(&cmd, &other)),
        };
        // An empty page that still claims more data would loop forever
        if more && ids.is_empty() {
            return Err(Error::FrameFormat(
                "id list page empty but more data indicated".into(),
            ));
        }
        all.extend(ids);
        if !more {
            return Ok(all);
        }
    }
}
