//! Walkthrough of a full secure-element session against the mock transport.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p plugntrust --example lifecycle

use plugntrust::constants::{RESULT_OBJECT_EXISTS, TAG_1};
use plugntrust::test_support::{seed_exchange, SharedMock};
use plugntrust::types::{CipherMode, MemoryType};
use plugntrust::{bytes_to_hex, ObjectId, Result, Session};

fn main() -> Result<()> {
    env_logger::init();

    // A real deployment would hand the session an I2C transport; the mock
    // plays the chip side here so the example runs anywhere.
    let mock = SharedMock::new();
    mock.push_response(plugntrust::test_support::atr_frame());

    let session = Session::new(mock.boxed()).connect()?;
    let atr = session.atr().expect("atr captured during connect");
    println!("protocol version: {}", atr.protocol_version);
    println!("vendor id:        {}", bytes_to_hex(&atr.vendor_id));

    seed_exchange(&mock, &[0x03, 0x01, 0x01, 0x6F, 0xFF, 0x01, 0x0B], 0x9000);
    let (mut session, version) = session.select_applet()?;
    println!("applet version:   {}", version);

    seed_exchange(&mock, &[TAG_1, 2, 0x7D, 0x00], 0x9000);
    let free = session.free_memory(MemoryType::Persistent)?;
    println!("persistent free:  {} bytes", free);

    seed_exchange(&mock, &[TAG_1, 8, 1, 2, 3, 4, 5, 6, 7, 8], 0x9000);
    let random = session.random(8)?;
    println!("random bytes:     {}", bytes_to_hex(&random));

    // Provision a key and run a one-shot encryption
    let key_id = ObjectId::new(0x0100);
    seed_exchange(&mock, &[], 0x9000);
    session.write_aes_key(key_id, b"Sixteen byte key")?;
    println!("key {} provisioned", key_id);

    let mut cipher_body = vec![TAG_1, 16];
    cipher_body.extend_from_slice(&[0xC1; 16]);
    seed_exchange(&mock, &cipher_body, 0x9000);
    let ciphertext = session.encrypt(key_id, CipherMode::AesCbcNoPad, &[0u8; 16])?;
    println!("ciphertext:       {}", bytes_to_hex(&ciphertext));

    // Store a binary object and check it exists
    let file_id = ObjectId::new(0x2000_0001);
    seed_exchange(&mock, &[], 0x9000);
    session.write_binary_object(file_id, 0, 6, b"MikroE")?;
    seed_exchange(&mock, &[TAG_1, 1, RESULT_OBJECT_EXISTS], 0x9000);
    println!("object {} present: {:?}", file_id, session.object_exists(file_id)?);

    mock.push_response(plugntrust::test_support::supervisory_ack_frame(
        plugntrust::constants::PCB_S_END_APDU_SESSION_REQ,
    ));
    session.close()?;
    println!("session closed");
    Ok(())
}
