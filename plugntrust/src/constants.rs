// plugntrust/src/constants.rs
//! Common protocol constants used across the crate

/// Node address byte for host -> secure element frames
pub const NAD_HOST_TO_SE: u8 = 0x5A;

/// Node address byte for secure element -> host frames
pub const NAD_SE_TO_HOST: u8 = 0xA5;

/// Minimal wire frame length in bytes: NAD + PCB + LEN + CRC16
pub const MIN_FRAME_LEN: usize = 5;

/// Maximum frame payload length. The one-byte LEN field counts payload plus
/// the two CRC bytes, so a single frame carries at most 253 payload bytes.
pub const MAX_FRAME_PAYLOAD_LEN: usize = 253;

/// Maximum APDU payload length (the TLV scratch budget)
pub const MAX_APDU_PAYLOAD_LEN: usize = 255;

/// I-block PCB base value (top two bits 00)
pub const PCB_I_BLOCK: u8 = 0x00;
/// I-block send-sequence bit
pub const PCB_I_SEQ: u8 = 0x40;
/// I-block more-data (chaining) bit. Decoded but never set: multi-frame
/// reassembly is not implemented.
pub const PCB_I_MORE: u8 = 0x20;

/// R-block PCB base value (top two bits 10)
pub const PCB_R_BLOCK: u8 = 0x80;
/// R-block sequence bit
pub const PCB_R_SEQ: u8 = 0x10;

/// S-block PCB base value (top two bits 11)
pub const PCB_S_BLOCK: u8 = 0xC0;
/// Bit distinguishing an S-block response from its request
pub const PCB_S_RESPONSE: u8 = 0x20;

/// S-block request: resynchronisation
pub const PCB_S_RESYNC_REQ: u8 = 0xC0;
/// S-block request: information field size negotiation
pub const PCB_S_IFS_REQ: u8 = 0xC1;
/// S-block request: abort chain
pub const PCB_S_ABORT_REQ: u8 = 0xC2;
/// S-block request: waiting time extension
pub const PCB_S_WTX_REQ: u8 = 0xC3;
/// S-block request: end APDU session
pub const PCB_S_END_APDU_SESSION_REQ: u8 = 0xC5;
/// S-block request: chip soft reset
pub const PCB_S_SOFT_RESET_REQ: u8 = 0xC6;
/// S-block request: fetch the answer-to-reset
pub const PCB_S_GET_ATR_REQ: u8 = 0xC7;

/// ISO class byte (SELECT)
pub const CLA_ISO: u8 = 0x00;
/// Proprietary class byte used by all applet commands
pub const CLA_DEFAULT: u8 = 0x80;

/// ISO SELECT instruction
pub const INS_SELECT: u8 = 0xA4;
/// Write / create secure objects
pub const INS_WRITE: u8 = 0x01;
/// Read secure objects and object lists
pub const INS_READ: u8 = 0x02;
/// Symmetric crypto operations
pub const INS_CRYPTO: u8 = 0x03;
/// Applet management (version, memory, random, existence, deletion)
pub const INS_MGMT: u8 = 0x04;

/// P1: no object-type qualifier
pub const P1_DEFAULT: u8 = 0x00;
/// P1: AES key object
pub const P1_AES: u8 = 0x03;
/// P1: binary file object
pub const P1_BINARY: u8 = 0x06;
/// P1: cipher context
pub const P1_CIPHER: u8 = 0x0E;

/// P2: default action
pub const P2_DEFAULT: u8 = 0x00;
/// P2: one-shot encryption
pub const P2_ENCRYPT_ONESHOT: u8 = 0x14;
/// P2: one-shot decryption
pub const P2_DECRYPT_ONESHOT: u8 = 0x15;
/// P2: applet version query
pub const P2_VERSION: u8 = 0x20;
/// P2: free memory query
pub const P2_MEMORY: u8 = 0x22;
/// P2: object identifier listing
pub const P2_LIST: u8 = 0x25;
/// P2: object existence check
pub const P2_EXIST: u8 = 0x27;
/// P2: object deletion
pub const P2_DELETE_OBJECT: u8 = 0x28;
/// P2: random number generation
pub const P2_RANDOM: u8 = 0x49;

/// TLV tag 1 (first positional argument)
pub const TAG_1: u8 = 0x41;
/// TLV tag 2
pub const TAG_2: u8 = 0x42;
/// TLV tag 3
pub const TAG_3: u8 = 0x43;
/// TLV tag 4
pub const TAG_4: u8 = 0x44;
/// TLV tag 5
pub const TAG_5: u8 = 0x45;

/// "No error" status word sentinel
pub const SW_NO_ERROR: u16 = 0x9000;
/// Status word: conditions of use not satisfied (typical answer to an
/// object operation issued before applet selection)
pub const SW_CONDITIONS_NOT_SATISFIED: u16 = 0x6985;
/// Status word: referenced object not found
pub const SW_OBJECT_NOT_FOUND: u16 = 0x6A82;

/// Result byte in an existence-check response: object present
pub const RESULT_OBJECT_EXISTS: u8 = 0x01;
/// Result byte in an existence-check response: object absent
pub const RESULT_OBJECT_ABSENT: u8 = 0x02;

/// AES key length accepted by the write-key command
pub const AES_KEY_LEN: usize = 16;

/// Application identifier of the Plug & Trust IoT applet
pub const APPLET_AID: [u8; 16] = [
    0xA0, 0x00, 0x00, 0x03, 0x96, 0x54, 0x53, 0x00, 0x00, 0x00, 0x01, 0x03, 0x00, 0x00, 0x00, 0x00,
];
