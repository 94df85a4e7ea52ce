use convert::{
    from_base64, from_base64_url, from_hex, to_base64, to_base64_url, to_hex, ConvertError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base64_roundtrip(data in any::<Vec<u8>>()) {
        let encoded = to_base64(&data);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(from_base64(&encoded).unwrap(), data);
    }

    #[test]
    fn base64_url_roundtrip(data in any::<Vec<u8>>()) {
        let encoded = to_base64_url(&data);
        prop_assert!(!encoded.contains('='));
        prop_assert!(!encoded.contains('+') && !encoded.contains('/'));
        prop_assert_eq!(from_base64_url(&encoded).unwrap(), data);
    }

    #[test]
    fn hex_roundtrip(data in any::<Vec<u8>>()) {
        let encoded = to_hex(&data);
        prop_assert_eq!(encoded.len(), data.len() * 2);
        prop_assert!(encoded.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
        prop_assert_eq!(from_hex(&encoded).unwrap(), data);
    }

    #[test]
    fn base64_url_is_standard_without_padding(data in any::<Vec<u8>>()) {
        let standard = to_base64(&data).replace('+', "-").replace('/', "_");
        prop_assert_eq!(to_base64_url(&data), standard.trim_end_matches('='));
    }

    #[test]
    fn bad_base64_length_is_rejected(s in "[A-Za-z0-9+/]{1,40}") {
        prop_assume!(s.len() % 4 != 0);
        prop_assert_eq!(from_base64(&s), Err(ConvertError::InvalidLength));
    }

    #[test]
    fn odd_hex_length_is_rejected(s in "[0-9a-f]{0,20}") {
        let odd = format!("{s}0");
        prop_assume!(odd.len() % 2 == 1);
        prop_assert_eq!(from_hex(&odd), Err(ConvertError::OddLength));
    }

    #[test]
    fn decoders_never_panic(s in "\\PC*") {
        let _ = from_base64(&s);
        let _ = from_base64_url(&s);
        let _ = from_hex(&s);
    }
}
