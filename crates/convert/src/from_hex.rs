//! Lowercase hex decoding.

use crate::constants::{lookup, HEX_REVERSE};
use crate::ConvertError;

/// Decodes a lowercase hex string.
///
/// Only `0-9` and `a-f` are accepted; uppercase digits are rejected.
///
/// # Errors
///
/// Returns [`ConvertError::OddLength`] for an odd number of characters and
/// [`ConvertError::InvalidCharacter`] for anything outside the alphabet.
///
/// # Example
///
/// ```
/// use convert::from_hex;
///
/// assert_eq!(from_hex("fe331782").unwrap(), [0xfe, 0x33, 0x17, 0x82]);
/// assert!(from_hex("FE").is_err());
/// ```
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, ConvertError> {
    let input = encoded.as_bytes();
    if input.len() % 2 != 0 {
        tracing::debug!(length = input.len(), "rejecting hex input: odd length");
        return Err(ConvertError::OddLength);
    }

    let nibble = |position: usize| {
        lookup(&HEX_REVERSE, input[position]).ok_or_else(|| {
            tracing::debug!(position, "rejecting hex input: invalid character");
            ConvertError::InvalidCharacter { position }
        })
    };

    (0..input.len())
        .step_by(2)
        .map(|i| Ok((nibble(i)? << 4) | nibble(i + 1)?))
        .collect()
}
