//! Byte sequence to text conversions.
//!
//! This crate provides:
//! - Standard base64 with `=` padding
//! - URL-safe base64 without padding
//! - Lowercase hexadecimal
//! - Custom base64 alphabets through [`Base64Config`]
//!
//! # Example
//!
//! ```
//! use convert::{from_base64, from_hex, to_base64, to_hex};
//!
//! let data = [0xfe, 0x33, 0x17, 0x82];
//! assert_eq!(to_base64(&data), "/jMXgg==");
//! assert_eq!(from_base64("/jMXgg==").unwrap(), data);
//! assert_eq!(to_hex(&data), "fe331782");
//! assert_eq!(from_hex("fe331782").unwrap(), data);
//! ```

mod config;
mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod from_base64_url;
mod from_hex;
mod to_base64;
mod to_base64_url;
mod to_hex;

pub use config::Base64Config;
pub use constants::{ALPHABET, ALPHABET_URL, HEX_ALPHABET, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use from_hex::from_hex;
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;
pub use to_hex::{to_hex, to_hex_into};

/// Error type for conversion operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The padded base64 string length is not a multiple of 4.
    #[error("Bad base64 data")]
    InvalidLength,
    /// The hex string has an odd number of characters.
    #[error("Bad input")]
    OddLength,
    /// The input contains a character outside the alphabet.
    #[error("Bad input string")]
    InvalidCharacter {
        /// Byte offset of the offending character.
        position: usize,
    },
    /// The alphabet must be exactly 64 distinct ASCII characters.
    #[error("alphabet must be 64 distinct ASCII characters")]
    InvalidAlphabet,
    /// The padding must be a single ASCII character outside the alphabet.
    #[error("padding must be a single ASCII character outside the alphabet")]
    InvalidPad,
    /// The destination buffer cannot hold the encoded output.
    #[error("output buffer too small: need {needed} bytes, have {actual}")]
    OutputTooSmall { needed: usize, actual: usize },
}

impl ConvertError {
    /// Returns true for errors caused by malformed encoded input, as opposed
    /// to a bad alphabet or buffer supplied by the caller.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidLength
                | ConvertError::OddLength
                | ConvertError::InvalidCharacter { .. }
        )
    }
}
