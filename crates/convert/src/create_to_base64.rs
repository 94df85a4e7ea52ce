//! Factory function for creating base64 encoders with custom alphabets.

use crate::config::Base64Config;
use crate::constants::PAD;
use crate::ConvertError;

/// Resolves factory arguments into a [`Base64Config`].
///
/// `chars` defaults to the standard alphabet and `pad` to `=`; an empty `pad`
/// disables padding.
pub(crate) fn config_from_parts(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<Base64Config, ConvertError> {
    let pad = match pad {
        None => Some(PAD as char),
        Some(pad) => {
            let mut it = pad.chars();
            match (it.next(), it.next()) {
                (None, _) => None,
                (Some(c), None) => Some(c),
                (Some(_), Some(_)) => return Err(ConvertError::InvalidPad),
            }
        }
    };

    let config = match chars {
        None => Base64Config::STANDARD,
        Some(chars) => Base64Config::new(chars, None)?,
    };
    config.with_pad(pad)
}

/// Creates a base64 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to `=`. Use an empty string for no padding.
///
/// # Errors
///
/// Returns an error if `chars` is not 64 distinct ASCII characters, or if `pad`
/// is longer than one character or clashes with the alphabet.
///
/// # Example
///
/// ```
/// use convert::create_to_base64;
///
/// let encode = create_to_base64(None, Some("")).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String, ConvertError> {
    let config = config_from_parts(chars, pad)?;
    Ok(move |uint8: &[u8]| config.encode(uint8))
}
