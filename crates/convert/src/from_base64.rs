//! Standard base64 decoding function.

use crate::{Base64Config, ConvertError};

/// Decodes a standard base64 string.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidLength`] if the length is not a multiple of
/// 4 and [`ConvertError::InvalidCharacter`] for characters outside the
/// standard alphabet.
///
/// # Example
///
/// ```
/// use convert::from_base64;
///
/// assert_eq!(from_base64("/jMXgg==").unwrap(), [0xfe, 0x33, 0x17, 0x82]);
/// assert!(from_base64("/jMXgg=").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, ConvertError> {
    Base64Config::STANDARD.decode(encoded)
}
