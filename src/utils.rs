use crate::consts;

/// Splits an instruction word into its four nibbles, most significant first.
pub fn nibble_split(opcode: u16) -> (u8, u8, u8, u8) {
    (
        ((opcode & 0xF000) >> 12) as u8,
        ((opcode & 0x0F00) >> 8) as u8,
        ((opcode & 0x00F0) >> 4) as u8,
        (opcode & 0x000F) as u8,
    )
}

/// Hundreds, tens and ones of `value`.
pub fn bcd_split(value: u8) -> [u8; 3] {
    [value / 100, (value % 100) / 10, value % 10]
}

/// True if `len` bytes starting at `addr` all lie inside memory.
pub fn bounds_check(addr: usize, len: usize) -> bool {
    addr.checked_add(len).map_or(false, |end| end <= consts::RAM_BYTES)
}
