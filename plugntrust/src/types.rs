// plugntrust/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use crate::Error;

/// Object identifier - Newtype Pattern (32-bit id addressing a stored
/// credential, key or binary blob on the secure element)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(u32);

impl ObjectId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self::from_be_bytes(arr))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Two-byte status word terminating every APDU response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord(u16);

impl StatusWord {
    /// The "no error" sentinel
    pub const NO_ERROR: Self = Self(crate::constants::SW_NO_ERROR);

    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Any value other than the sentinel counts as failure
    pub fn is_success(&self) -> bool {
        *self == Self::NO_ERROR
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Memory region selector for free-memory queries
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryType {
    Persistent = 1,
    TransientReset = 2,
    TransientDeselect = 3,
}

/// Symmetric cipher mode byte carried in the cipher command TLV
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherMode {
    AesCbcNoPad = 0x0D,
    AesEcbNoPad = 0x0E,
}

/// Direction of a one-shot cipher operation (selects the P2 byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherDirection {
    Encrypt,
    Decrypt,
}

/// Outcome of an object existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectPresence {
    Exists,
    DoesNotExist,
}

/// Applet version and configuration, returned by applet selection and by
/// the version query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppletVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub applet_config: u16,
    pub secure_box: u16,
}

impl AppletVersion {
    /// Parse the fixed 7-byte version info layout:
    /// major, minor, patch, applet config (2, BE), secure box (2, BE).
    pub fn parse(data: &[u8]) -> crate::Result<Self> {
        if data.len() != 7 {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: data.len(),
            });
        }
        Ok(Self {
            major: data[0],
            minor: data[1],
            patch: data[2],
            applet_config: u16::from_be_bytes([data[3], data[4]]),
            secure_box: u16::from_be_bytes([data[5], data[6]]),
        })
    }
}

impl fmt::Display for AppletVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Answer-to-reset contents sent after a soft reset
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtrInfo {
    pub protocol_version: u8,
    pub vendor_id: [u8; 5],
    /// Data link layer parameters (frame size, timing)
    pub dll_params: Vec<u8>,
    pub physical_layer_id: u8,
    pub physical_layer_params: Vec<u8>,
    pub historical: Vec<u8>,
}

impl fmt::Display for AtrInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "protocol v{}, vendor {}",
            self.protocol_version,
            crate::utils::bytes_to_hex(&self.vendor_id)
        )
    }
}
