//! Factory function for creating base64 decoders with custom alphabets.

use crate::create_to_base64::config_from_parts;
use crate::ConvertError;

/// Creates a base64 decoder function with a custom alphabet.
///
/// Takes the same arguments as [`create_to_base64`](crate::create_to_base64),
/// so an encoder and decoder built from the same arguments round-trip.
///
/// # Errors
///
/// Returns an error if `chars` is not 64 distinct ASCII characters, or if `pad`
/// is longer than one character or clashes with the alphabet.
///
/// # Example
///
/// ```
/// use convert::create_from_base64;
///
/// let decode = create_from_base64(None, None).unwrap();
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, ConvertError>, ConvertError> {
    let config = config_from_parts(chars, pad)?;
    Ok(move |encoded: &str| config.decode(encoded))
}
