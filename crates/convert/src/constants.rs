/// Standard base64 alphabet.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Lowercase hex alphabet.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Padding character.
pub const PAD: u8 = b'=';

/// Marks a character that is not part of an alphabet in a reverse table.
pub(crate) const INVALID: i8 = -1;

/// Maps ASCII codes to their alphabet index, or [`INVALID`].
pub(crate) type ReverseTable = [i8; 128];

/// Builds the reverse lookup table for `alphabet`.
///
/// When `pad` is given it maps to 0 so that a trailing pad can be read as an
/// empty sextet; it is never decoded as data.
pub(crate) const fn reverse_table(alphabet: &[u8], pad: Option<u8>) -> ReverseTable {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < alphabet.len() {
        table[alphabet[i] as usize] = i as i8;
        i += 1;
    }
    if let Some(pad) = pad {
        table[pad as usize] = 0;
    }
    table
}

pub(crate) const BASE64_REVERSE: ReverseTable = reverse_table(ALPHABET, Some(PAD));

pub(crate) const BASE64_URL_REVERSE: ReverseTable = reverse_table(ALPHABET_URL, None);

pub(crate) static HEX_REVERSE: ReverseTable = reverse_table(HEX_ALPHABET, None);

/// Looks up `byte` in `table`, returning `None` for non-ASCII or unknown bytes.
#[inline]
pub(crate) fn lookup(table: &ReverseTable, byte: u8) -> Option<u8> {
    match table.get(byte as usize) {
        Some(&value) if value != INVALID => Some(value as u8),
        _ => None,
    }
}
