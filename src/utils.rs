/// Value of a single hex digit, 0 for anything that is not one.
#[inline(always)]
pub fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Reads the two hex digits at `offset` as a byte. Digits past the end of
/// `hex` count as '0'.
pub fn hex_byte(hex: &str, offset: usize) -> u8 {
    let bytes = hex.as_bytes();
    let hi = bytes.get(offset).copied().map_or(0, hex_nibble);
    let lo = bytes.get(offset + 1).copied().map_or(0, hex_nibble);
    (hi << 4) | lo
}

/// Integer division rounding up. `b` must be non-zero.
#[inline(always)]
pub fn ceil_div(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}
