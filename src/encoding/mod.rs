// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Percent encoding over the RFC 3986 unreserved character set.
//!
//! Only `A-Z`, `a-z`, `0-9` and `~ . - _` are emitted literally. Every other
//! byte of the UTF-8 input, including space, reserved punctuation and all
//! non-ASCII bytes, is escaped as `%XX` with uppercase hex digits, so the
//! output escapes more than a typical query-string encoder would.
//!
//! # Example
//!
//! ```rust
//! use simple_http_client::encoding::{decode, encode};
//!
//! assert_eq!(encode("a b&c"), "a%20b%26c");
//! assert_eq!(decode("a%20b%26c").unwrap(), "a b&c");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

/// Bytes that get escaped: everything except ASCII alphanumerics and `~ . - _`.
const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'~').remove(b'.').remove(b'-').remove(b'_');

/// Errors raised while decoding a percent-encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` was not followed by two more characters.
    #[error("Truncated percent escape at byte offset {offset}")]
    TruncatedEscape {
        /// Byte offset of the `%` in the input.
        offset: usize,
    },

    /// A `%` was followed by something other than two hex digits.
    #[error("Invalid hex digit in percent escape at byte offset {offset}")]
    InvalidHexDigit {
        /// Byte offset of the `%` in the input.
        offset: usize,
    },

    /// The decoded bytes are not valid UTF-8.
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Percent-encodes `value`, leaving only unreserved characters as they are.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED_ENCODE_SET).to_string()
}

/// Like [`encode`], but treats a missing value as the empty string.
pub fn encode_opt(value: Option<&str>) -> String {
    value.map(encode).unwrap_or_default()
}

/// Decodes a percent-encoded string.
///
/// Characters other than `%` are copied through byte for byte, so already
/// decoded non-ASCII text survives unchanged. The collected bytes must form
/// valid UTF-8.
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut buffer = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            // Fewer than two characters (not bytes) left after the `%`.
            if encoded[i + 1..].chars().nth(1).is_none() {
                return Err(DecodeError::TruncatedEscape { offset: i });
            }
            let high = hex_value(bytes[i + 1]).ok_or(DecodeError::InvalidHexDigit { offset: i })?;
            let low = hex_value(bytes[i + 2]).ok_or(DecodeError::InvalidHexDigit { offset: i })?;
            buffer.push((high << 4) | low);
            i += 3;
        } else {
            buffer.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(buffer).map_err(|_| DecodeError::InvalidUtf8)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_unreserved_characters() {
        let unreserved = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789~.-_";
        assert_eq!(encode(unreserved), unreserved);
    }

    #[test]
    fn test_encode_escapes_reserved_and_space() {
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("!*'();:@&=+$,/?#[]"), "%21%2A%27%28%29%3B%3A%40%26%3D%2B%24%2C%2F%3F%23%5B%5D");
        assert_eq!(encode("100%"), "100%25");
    }

    #[test]
    fn test_encode_escapes_each_utf8_byte_in_uppercase() {
        assert_eq!(encode("é"), "%C3%A9");
        assert_eq!(encode("日本"), "%E6%97%A5%E6%9C%AC");
        assert_eq!(encode("\n"), "%0A");
    }

    #[test]
    fn test_encode_missing_value_is_empty() {
        assert_eq!(encode_opt(None), "");
        assert_eq!(encode_opt(Some("x y")), "x%20y");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_output_alphabet() {
        let input: String = (1u8..=127).map(char::from).chain("ü€😀".chars()).collect();
        let encoded = encode(&input);
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '~' | '.' | '_' | '-' | '%'))
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let samples = [
            "",
            "plain",
            "a b c",
            "key=value&other=1",
            "100% sure",
            "ünïcödé ✓ 😀",
            "line\nbreak\ttab",
            "~._-",
        ];
        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_decode_accepts_lowercase_hex() {
        assert_eq!(decode("%c3%a9").unwrap(), "é");
    }

    #[test]
    fn test_decode_passes_through_unescaped_characters() {
        assert_eq!(decode("a+b").unwrap(), "a+b");
        assert_eq!(decode("ü%20x").unwrap(), "ü x");
    }

    #[test]
    fn test_decode_truncated_escape() {
        assert_eq!(decode("abc%"), Err(DecodeError::TruncatedEscape { offset: 3 }));
        assert_eq!(decode("abc%4"), Err(DecodeError::TruncatedEscape { offset: 3 }));
        assert_eq!(decode("%é"), Err(DecodeError::TruncatedEscape { offset: 0 }));
    }

    #[test]
    fn test_decode_invalid_hex_digit() {
        assert_eq!(decode("%zz"), Err(DecodeError::InvalidHexDigit { offset: 0 }));
        assert_eq!(decode("ok%4g"), Err(DecodeError::InvalidHexDigit { offset: 2 }));
        assert_eq!(decode("%éa"), Err(DecodeError::InvalidHexDigit { offset: 0 }));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert_eq!(decode("%FF%FE"), Err(DecodeError::InvalidUtf8));
    }
}
