// plugntrust/src/tlv/mod.rs

//! Tag-Length-Value encoding for APDU payloads.
//!
//! The grammar is deliberately simple: `TAG(1) | LEN(1) | VALUE(LEN)`.
//! Scalar writers emit a length byte equal to the scalar width and the value
//! big-endian; the buffer form carries an explicit length byte, so a single
//! entry is limited to 255 value bytes. Extraction is a linear scan over the
//! payload with first match winning.

use crate::constants::MAX_APDU_PAYLOAD_LEN;
use crate::{Error, Result};

/// One decoded TLV entry, borrowing from the scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}

/// Capacity-checked TLV payload builder.
///
/// The destination is the APDU payload field, so the default capacity is the
/// 255-byte payload budget. Appends that would exceed the capacity fail with
/// `BufferOverflow` instead of growing past it.
#[derive(Debug)]
pub struct TlvWriter {
    buf: Vec<u8>,
    capacity: usize,
}

impl TlvWriter {
    /// Writer bounded by the APDU payload budget.
    pub fn new() -> Self {
        Self::with_capacity(MAX_APDU_PAYLOAD_LEN)
    }

    /// Writer bounded by an explicit capacity (for tests and sub-payloads).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity.min(MAX_APDU_PAYLOAD_LEN)),
            capacity,
        }
    }

    fn ensure(&self, extra: usize) -> Result<()> {
        let needed = self.buf.len() + extra;
        if needed > self.capacity {
            return Err(Error::BufferOverflow {
                capacity: self.capacity,
                needed,
            });
        }
        Ok(())
    }

    /// Append `tag | 0x01 | value`.
    pub fn push_u8(&mut self, tag: u8, value: u8) -> Result<()> {
        self.ensure(3)?;
        self.buf.push(tag);
        self.buf.push(1);
        self.buf.push(value);
        Ok(())
    }

    /// Append `tag | 0x02 | value_be`.
    pub fn push_u16(&mut self, tag: u8, value: u16) -> Result<()> {
        self.ensure(4)?;
        self.buf.push(tag);
        self.buf.push(2);
        self.buf.extend_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Append `tag | 0x04 | value_be`.
    pub fn push_u32(&mut self, tag: u8, value: u32) -> Result<()> {
        self.ensure(6)?;
        self.buf.push(tag);
        self.buf.push(4);
        self.buf.extend_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// As `push_u16`, but a no-op when the value is zero. Used to omit
    /// default-valued optional protocol fields.
    pub fn push_u16_optional(&mut self, tag: u8, value: u16) -> Result<()> {
        if value == 0 {
            return Ok(());
        }
        self.push_u16(tag, value)
    }

    /// Append `tag | len | data`. Fails when `data` does not fit a
    /// single-byte length field.
    pub fn push_bytes(&mut self, tag: u8, data: &[u8]) -> Result<()> {
        if data.len() > 0xFF {
            return Err(Error::InvalidLength {
                expected: 0xFF,
                actual: data.len(),
            });
        }
        self.ensure(2 + data.len())?;
        self.buf.push(tag);
        self.buf.push(data.len() as u8);
        self.buf.extend_from_slice(data);
        Ok(())
    }

    /// As `push_bytes`, but a no-op for an empty buffer.
    pub fn push_bytes_optional(&mut self, tag: u8, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        self.push_bytes(tag, data)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for TlvWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over TLV entries with bounds validated before a value is
/// yielded. A declared length running past the end of the payload produces
/// one `InvalidLength` error and terminates the iteration.
#[derive(Debug, Clone)]
pub struct TlvIter<'a> {
    data: &'a [u8],
    pos: usize,
    poisoned: bool,
}

impl<'a> TlvIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            poisoned: false,
        }
    }
}

impl<'a> Iterator for TlvIter<'a> {
    type Item = Result<Tlv<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned || self.pos >= self.data.len() {
            return None;
        }
        // A lone tag byte with no length is malformed
        if self.pos + 2 > self.data.len() {
            self.poisoned = true;
            return Some(Err(Error::InvalidLength {
                expected: self.pos + 2,
                actual: self.data.len(),
            }));
        }
        let tag = self.data[self.pos];
        let len = self.data[self.pos + 1] as usize;
        let start = self.pos + 2;
        let end = start + len;
        if end > self.data.len() {
            self.poisoned = true;
            return Some(Err(Error::InvalidLength {
                expected: end,
                actual: self.data.len(),
            }));
        }
        self.pos = end;
        Some(Ok(Tlv {
            tag,
            value: &self.data[start..end],
        }))
    }
}

/// Scan for the first entry with `tag` and return its value slice.
pub fn find<'a>(data: &'a [u8], tag: u8) -> Result<&'a [u8]> {
    for entry in TlvIter::new(data) {
        let entry = entry?;
        if entry.tag == tag {
            return Ok(entry.value);
        }
    }
    Err(Error::TagNotFound { tag })
}

fn find_exact<'a>(data: &'a [u8], tag: u8, width: usize) -> Result<&'a [u8]> {
    let value = find(data, tag)?;
    if value.len() != width {
        return Err(Error::InvalidLength {
            expected: width,
            actual: value.len(),
        });
    }
    Ok(value)
}

/// Extract a one-byte scalar stored under `tag`.
pub fn get_u8(data: &[u8], tag: u8) -> Result<u8> {
    Ok(find_exact(data, tag, 1)?[0])
}

/// Extract a big-endian u16 stored under `tag`.
pub fn get_u16(data: &[u8], tag: u8) -> Result<u16> {
    let v = find_exact(data, tag, 2)?;
    Ok(u16::from_be_bytes([v[0], v[1]]))
}

/// Extract a big-endian u32 stored under `tag`.
pub fn get_u32(data: &[u8], tag: u8) -> Result<u32> {
    let v = find_exact(data, tag, 4)?;
    Ok(u32::from_be_bytes([v[0], v[1], v[2], v[3]]))
}

/// Extract a raw buffer stored under `tag`.
pub fn get_bytes<'a>(data: &'a [u8], tag: u8) -> Result<&'a [u8]> {
    find(data, tag)
}
