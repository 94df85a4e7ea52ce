//! Lowercase hex encoding.

use crate::constants::HEX_ALPHABET;

/// Encodes a byte slice as lowercase hex, high nibble first.
///
/// # Example
///
/// ```
/// use convert::to_hex;
///
/// assert_eq!(to_hex(&[0xfe, 0x33, 0x17, 0x82]), "fe331782");
/// ```
pub fn to_hex(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(uint8.len() * 2);
    to_hex_into(uint8, &mut out);
    out
}

/// Appends the lowercase hex encoding of `uint8` to `out`.
pub fn to_hex_into(uint8: &[u8], out: &mut String) {
    out.reserve(uint8.len() * 2);
    for &byte in uint8 {
        out.push(HEX_ALPHABET[(byte >> 4) as usize] as char);
        out.push(HEX_ALPHABET[(byte & 15) as usize] as char);
    }
}
