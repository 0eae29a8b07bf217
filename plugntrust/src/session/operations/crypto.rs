// plugntrust/src/session/operations/crypto.rs

use crate::protocol::{Command, Response};
use crate::session::{unexpected_response, Ready, Session};
use crate::types::{CipherDirection, CipherMode, ObjectId};
use crate::Result;

pub fn write_aes_key(session: &mut Session<Ready>, id: ObjectId, key: &[u8]) -> Result<()> {
    let cmd = Command::WriteAesKey {
        id,
        key: key.to_vec(),
    };
    match session.execute(&cmd)? {
        Response::Done => Ok(()),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn cipher(
    session: &mut Session<Ready>,
    key: ObjectId,
    mode: CipherMode,
    direction: CipherDirection,
    input: &[u8],
) -> Result<Vec<u8>> {
    let cmd = Command::Cipher {
        key,
        mode,
        direction,
        input: input.to_vec(),
    };
    match session.execute(&cmd)? {
        Response::CipherOutput(output) => Ok(output),
        other => Err(unexpected_response(&cmd, &other)),
    }
}

pub fn encrypt(
    session: &mut Session<Ready>,
    key: ObjectId,
    mode: CipherMode,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    cipher(session, key, mode, CipherDirection::Encrypt, plaintext)
}

pub fn decrypt(
    session: &mut Session<Ready>,
    key: ObjectId,
    mode: CipherMode,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    cipher(session, key, mode, CipherDirection::Decrypt, ciphertext)
}
