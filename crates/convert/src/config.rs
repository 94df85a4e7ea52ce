//! Shared base64 encoder/decoder parametrized by alphabet and padding.

use crate::constants::{
    lookup, reverse_table, ReverseTable, ALPHABET, ALPHABET_URL, BASE64_REVERSE,
    BASE64_URL_REVERSE, PAD,
};
use crate::ConvertError;

/// A base64 alphabet together with its padding policy.
///
/// Every base64 entry point in this crate goes through one of these. The
/// two built-in variants are [`Base64Config::STANDARD`] and
/// [`Base64Config::URL_SAFE`]; others can be built with [`Base64Config::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64Config {
    alphabet: [u8; 64],
    reverse: ReverseTable,
    pad: Option<u8>,
}

impl Base64Config {
    /// Standard alphabet, padded with `=` to a multiple of 4 characters.
    pub const STANDARD: Self = Self {
        alphabet: *ALPHABET,
        reverse: BASE64_REVERSE,
        pad: Some(PAD),
    };

    /// URL-safe alphabet, no padding.
    pub const URL_SAFE: Self = Self {
        alphabet: *ALPHABET_URL,
        reverse: BASE64_URL_REVERSE,
        pad: None,
    };

    /// Creates a configuration from a 64-character alphabet and an optional
    /// padding character.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidAlphabet`] unless `chars` consists of
    /// exactly 64 distinct ASCII characters, and [`ConvertError::InvalidPad`]
    /// if `pad` is not ASCII or appears in the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use convert::Base64Config;
    ///
    /// let config = Base64Config::new(
    ///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,",
    ///     Some('~'),
    /// )
    /// .unwrap();
    /// assert_eq!(config.encode(&[0xfe, 0x33, 0x17, 0x82]), ",jMXgg~~");
    /// ```
    pub fn new(chars: &str, pad: Option<char>) -> Result<Self, ConvertError> {
        if chars.len() != 64 || !chars.is_ascii() {
            return Err(ConvertError::InvalidAlphabet);
        }

        let mut alphabet = [0u8; 64];
        alphabet.copy_from_slice(chars.as_bytes());

        let mut seen = [false; 128];
        for &c in &alphabet {
            if seen[c as usize] {
                return Err(ConvertError::InvalidAlphabet);
            }
            seen[c as usize] = true;
        }

        Self {
            alphabet,
            reverse: reverse_table(&alphabet, None),
            pad: None,
        }
        .with_pad(pad)
    }

    /// Returns this configuration with a different padding character.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidPad`] if `pad` is not ASCII or appears
    /// in the alphabet.
    pub fn with_pad(self, pad: Option<char>) -> Result<Self, ConvertError> {
        let pad = match pad {
            None => None,
            Some(c) if c.is_ascii() && !self.alphabet.contains(&(c as u8)) => Some(c as u8),
            Some(_) => return Err(ConvertError::InvalidPad),
        };

        Ok(Self {
            alphabet: self.alphabet,
            reverse: reverse_table(&self.alphabet, pad),
            pad,
        })
    }

    pub fn alphabet(&self) -> &[u8; 64] {
        &self.alphabet
    }

    pub fn pad(&self) -> Option<u8> {
        self.pad
    }

    /// Length of the encoding of `n` input bytes: `4 * ceil(n / 3)` when
    /// padded, `ceil(n * 8 / 6)` otherwise.
    pub fn encoded_len(&self, n: usize) -> usize {
        let full = n / 3 * 4;
        match (self.pad, n % 3) {
            (_, 0) => full,
            (Some(_), _) => full + 4,
            (None, 1) => full + 2,
            (None, _) => full + 3,
        }
    }

    /// Encodes `input` into a new string.
    pub fn encode(&self, input: &[u8]) -> String {
        let mut out = String::with_capacity(self.encoded_len(input.len()));
        self.encode_with(input, |c| out.push(c as char));
        out
    }

    /// Encodes `input` into the start of `dest`, returning the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::OutputTooSmall`] if `dest` is shorter than
    /// [`Base64Config::encoded_len`]; `dest` is left untouched in that case.
    pub fn encode_to_slice(&self, input: &[u8], dest: &mut [u8]) -> Result<usize, ConvertError> {
        let needed = self.encoded_len(input.len());
        if dest.len() < needed {
            return Err(ConvertError::OutputTooSmall {
                needed,
                actual: dest.len(),
            });
        }

        let mut offset = 0;
        self.encode_with(input, |c| {
            dest[offset] = c;
            offset += 1;
        });
        Ok(offset)
    }

    /// Decodes a base64 string.
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, ConvertError> {
        self.decode_bytes(input.as_bytes())
    }

    /// Decodes base64 text held in a byte slice.
    ///
    /// With padding configured the input length must be a multiple of 4 and
    /// trailing pad characters are trimmed before decoding. Without padding
    /// any length is accepted. Bits left over past the last whole byte are
    /// discarded.
    pub fn decode_bytes(&self, input: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let mut length = input.len();

        if let Some(pad) = self.pad {
            if length % 4 != 0 {
                tracing::debug!(length, "rejecting base64 input: length not a multiple of 4");
                return Err(ConvertError::InvalidLength);
            }
            while length > 0 && input[length - 1] == pad {
                length -= 1;
            }
        }

        let input = &input[..length];
        // length * 6 / 8 without the intermediate overflow
        let output_length = length / 4 * 3 + length % 4 * 6 / 8;
        let mut out = Vec::with_capacity(output_length);

        for (group, chunk) in input.chunks(4).enumerate() {
            let mut three_bytes = 0u32;
            for run in 0..4 {
                let sextet = match chunk.get(run) {
                    Some(&c) => lookup(&self.reverse, c).ok_or_else(|| {
                        let position = group * 4 + run;
                        tracing::debug!(position, length, "rejecting base64 input: invalid character");
                        ConvertError::InvalidCharacter { position }
                    })?,
                    None => 0,
                };
                three_bytes = (three_bytes << 6) | u32::from(sextet);
            }

            for _ in 0..3 {
                if out.len() == output_length {
                    break;
                }
                out.push((three_bytes >> 16) as u8);
                three_bytes <<= 8;
            }
        }

        Ok(out)
    }

    /// Packs up to three bytes at a time into 24 bits and emits the top six
    /// bits per character until the group's valid bits run out, then pads.
    fn encode_with(&self, input: &[u8], mut emit: impl FnMut(u8)) {
        for chunk in input.chunks(3) {
            let mut data = chunk
                .iter()
                .enumerate()
                .fold(0u32, |acc, (i, &b)| acc | (u32::from(b) << (16 - 8 * i)));
            let mut bits = chunk.len() * 8;

            for _ in 0..4 {
                if bits > 0 {
                    emit(self.alphabet[((data >> 18) & 63) as usize]);
                    data <<= 6;
                    bits = bits.saturating_sub(6);
                } else if let Some(pad) = self.pad {
                    emit(pad);
                }
            }
        }
    }
}

impl Default for Base64Config {
    fn default() -> Self {
        Self::STANDARD
    }
}
