//! Base64 segment decoding with padding repair
//!
//! Token issuers routinely strip the trailing `=` padding from each segment.
//! Segments are re-padded to a multiple of four characters and then decoded
//! with the padded engine of the selected alphabet, so both padded and
//! unpadded input is accepted.

use base64::{
    DecodeError, Engine,
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
};
use std::borrow::Cow;

/// Base64 alphabet used to decode token segments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// RFC 4648 standard alphabet (`+` and `/`)
    #[default]
    Standard,
    /// RFC 4648 URL-safe alphabet (`-` and `_`), as used by RFC 7515
    UrlSafe,
}

/// Decode one segment, appending `=` until its length is a multiple of four
pub fn decode_segment(input: &str, alphabet: Alphabet) -> Result<Vec<u8>, DecodeError> {
    let missing = input.len() % 4;
    let padded = if missing == 0 {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("{input}{}", "=".repeat(4 - missing)))
    };

    match alphabet {
        Alphabet::Standard => STANDARD.decode(padded.as_bytes()),
        Alphabet::UrlSafe => URL_SAFE.decode(padded.as_bytes()),
    }
}

/// Encode bytes as an unpadded segment
pub fn encode_segment(input: &[u8], alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Standard => STANDARD_NO_PAD.encode(input),
        Alphabet::UrlSafe => URL_SAFE_NO_PAD.encode(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unpadded() {
        assert_eq!(decode_segment("Zg", Alphabet::Standard).unwrap(), b"f");
        assert_eq!(decode_segment("Zm8", Alphabet::Standard).unwrap(), b"fo");
        assert_eq!(decode_segment("Zm9v", Alphabet::Standard).unwrap(), b"foo");
        assert_eq!(
            decode_segment("SGVsbG8", Alphabet::Standard).unwrap(),
            b"Hello"
        );
    }

    #[test]
    fn test_decode_already_padded() {
        assert_eq!(
            decode_segment("SGVsbG8=", Alphabet::Standard).unwrap(),
            b"Hello"
        );
        assert_eq!(decode_segment("Zg==", Alphabet::UrlSafe).unwrap(), b"f");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(
            decode_segment("", Alphabet::Standard).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_segment("!!!", Alphabet::Standard).is_err());
        // A single leftover character can never encode a full byte
        assert!(decode_segment("A", Alphabet::Standard).is_err());
        assert!(decode_segment("Zm9vY", Alphabet::Standard).is_err());
    }

    #[test]
    fn test_alphabet_mismatch() {
        assert_eq!(encode_segment(&[0xfb, 0xff], Alphabet::UrlSafe), "-_8");
        assert_eq!(encode_segment(&[0xfb, 0xff], Alphabet::Standard), "+/8");

        assert!(decode_segment("-_8", Alphabet::Standard).is_err());
        assert_eq!(
            decode_segment("-_8", Alphabet::UrlSafe).unwrap(),
            vec![0xfb, 0xff]
        );
        assert!(decode_segment("+/8", Alphabet::UrlSafe).is_err());
    }

    #[test]
    fn test_reencode_matches_input() {
        let encoded = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        let decoded = decode_segment(encoded, Alphabet::Standard).unwrap();
        assert_eq!(encode_segment(&decoded, Alphabet::Standard), encoded);
    }
}
