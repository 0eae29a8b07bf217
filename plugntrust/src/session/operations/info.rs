// plugntrust/src/session/operations/info.rs

use crate::protocol::{Command, Response};
use crate::session::{unexpected_response, Ready, Session};
use crate::types::{AppletVersion, MemoryType};
use crate::Result;

pub fn get_applet_info(session: &mut Session<Ready>) -> Result<AppletVersion> {
    let cmd = Command::GetVersion;
    match session.execute(&cmd)? {
        Response::Version(version) => Ok(version),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn get_free_memory(session: &mut Session<Ready>, memory: MemoryType) -> Result<u16> {
    let cmd = Command::GetFreeMemory { memory };
    match session.execute(&cmd)? {
        Response::FreeMemory(bytes) => Ok(bytes),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn get_random(session: &mut Session<Ready>, len: u16) -> Result<Vec<u8>> {
    let cmd = Command::GetRandom { len };
    match session.execute(&cmd)? {
        Response::Random(bytes) => Ok(bytes),
        other => Err(unexpected_response(&cmd, &other)),
    }
}
