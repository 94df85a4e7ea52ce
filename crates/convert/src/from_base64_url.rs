//! URL-safe base64 decoding function.

use crate::{Base64Config, ConvertError};

/// Decodes an unpadded URL-safe base64 string.
///
/// Any input length is accepted; `=` is not part of the alphabet.
///
/// # Example
///
/// ```
/// use convert::from_base64_url;
///
/// assert_eq!(from_base64_url("_jMXgg").unwrap(), [0xfe, 0x33, 0x17, 0x82]);
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, ConvertError> {
    Base64Config::URL_SAFE.decode(encoded)
}
