// plugntrust/src/protocol/commands/object.rs

use crate::constants::*;
use crate::protocol::apdu::Apdu;
use crate::tlv::TlvWriter;
use crate::types::ObjectId;
use crate::Result;

/// Existence check for a secure object.
pub fn encode_check_object_exists(id: ObjectId) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, id.as_u32())?;
    Ok(Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_EXIST)
        .with_payload(tlv.into_bytes())
        .expect_all())
}

/// Delete a secure object. No response data beyond the status word.
pub fn encode_delete_object(id: ObjectId) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, id.as_u32())?;
    Ok(Apdu::new(CLA_DEFAULT, INS_MGMT, P1_DEFAULT, P2_DELETE_OBJECT)
        .with_payload(tlv.into_bytes()))
}

/// Read a binary object. Zero `offset`/`len` are omitted on the wire and
/// mean "from the start" / "everything stored".
pub fn encode_read_object(id: ObjectId, offset: u16, len: u16) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, id.as_u32())?;
    tlv.push_u16_optional(TAG_2, offset)?;
    tlv.push_u16_optional(TAG_3, len)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_READ, P1_DEFAULT, P2_DEFAULT)
        .with_payload(tlv.into_bytes())
        .expect_all())
}

/// Write a binary object, creating it when absent. `total_len` declares the
/// file size on creation and is omitted when zero (existing object).
pub fn encode_write_binary(id: ObjectId, offset: u16, total_len: u16, data: &[u8]) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u32(TAG_1, id.as_u32())?;
    tlv.push_u16_optional(TAG_2, offset)?;
    tlv.push_u16_optional(TAG_3, total_len)?;
    tlv.push_bytes(TAG_4, data)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_WRITE, P1_BINARY, P2_DEFAULT).with_payload(tlv.into_bytes()))
}

/// Page through the identifiers of all stored objects starting at `offset`.
pub fn encode_read_id_list(offset: u16) -> Result<Apdu> {
    let mut tlv = TlvWriter::new();
    tlv.push_u16(TAG_1, offset)?;
    // Filter byte: list every object type
    tlv.push_u8(TAG_2, 0xFF)?;
    Ok(Apdu::new(CLA_DEFAULT, INS_READ, P1_DEFAULT, P2_LIST)
        .with_payload(tlv.into_bytes())
        .expect_all())
}
