// plugntrust/src/protocol/responses/atr.rs

use crate::types::AtrInfo;
use crate::{Error, Result};

/// Parse the answer-to-reset payload returned by a soft reset.
///
/// Layout: protocol version (1), vendor id (5), then three length-prefixed
/// sections for data-link-layer parameters, physical-layer id + parameters
/// and historical bytes.
pub fn decode_atr(data: &[u8]) -> Result<AtrInfo> {
    let mut cursor = Cursor::new(data);
    let protocol_version = cursor.take_u8()?;
    let vendor_id: [u8; 5] = cursor
        .take(5)?
        .try_into()
        .map_err(|_| Error::FrameFormat("vendor id truncated".into()))?;
    let dllp_len = cursor.take_u8()? as usize;
    let dll_params = cursor.take(dllp_len)?.to_vec();
    let physical_layer_id = cursor.take_u8()?;
    let phy_len = cursor.take_u8()? as usize;
    let physical_layer_params = cursor.take(phy_len)?.to_vec();
    let hist_len = cursor.take_u8()? as usize;
    let historical = cursor.take(hist_len)?.to_vec();
    Ok(AtrInfo {
        protocol_version,
        vendor_id,
        dll_params,
        physical_layer_id,
        physical_layer_params,
        historical,
    })
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::InvalidLength {
            expected: n,
            actual: self.data.len() - self.pos,
        })?;
        if end > self.data.len() {
            return Err(Error::InvalidLength {
                expected: n,
                actual: self.data.len() - self.pos,
            });
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
}
