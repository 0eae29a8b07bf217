// plugntrust/src/protocol/checksum.rs

/// CRC-16/X.25 over the frame header and payload (NAD, PCB, LEN, data).
/// Init 0xFFFF, reflected polynomial 0x8408, final XOR 0xFFFF. The wire
/// carries the low byte first.
pub fn crc16(data: &[u8]) -> u16 {
    let mut state: u16 = 0xFFFF;
    for byte in data {
        state ^= *byte as u16;
        for _ in 0..8 {
            if state & 1 != 0 {
                state = (state >> 1) ^ 0x8408;
            } else {
                state >>= 1;
            }
        }
    }
    state ^ 0xFFFF
}

/// Split a CRC into its wire representation (low byte first).
pub fn crc16_bytes(data: &[u8]) -> [u8; 2] {
    crc16(data).to_le_bytes()
}
