//! Standard base64 encoding function.

use crate::Base64Config;

/// Encodes a byte slice to a standard base64 string.
///
/// The output is padded with `=` to a multiple of 4 characters.
///
/// # Example
///
/// ```
/// use convert::to_base64;
///
/// assert_eq!(to_base64(&[0xfe, 0x33, 0x17, 0x82]), "/jMXgg==");
/// assert_eq!(to_base64(b""), "");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    Base64Config::STANDARD.encode(uint8)
}
