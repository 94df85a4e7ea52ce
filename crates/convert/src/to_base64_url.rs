//! URL-safe base64 encoding function.

use crate::Base64Config;

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use convert::to_base64_url;
///
/// assert_eq!(to_base64_url(&[0xfe, 0x33, 0x17, 0x82]), "_jMXgg");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    Base64Config::URL_SAFE.encode(uint8)
}
