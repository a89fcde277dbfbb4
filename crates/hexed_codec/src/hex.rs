//! Hex text parsing and formatting.
//!
//! Byte sequences are typed as whitespace-separated tokens of one or two hex
//! digits, e.g. `DE AD be ef` or `7 f`.

use crate::error::{CodecError, CodecResult};
use std::fmt::Write;

/// Parses a single one- or two-digit hex token.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] for anything else.
pub fn parse_hex_byte(token: &str) -> CodecResult<u8> {
    let token = token.trim();
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::invalid_hex(token));
    }
    u8::from_str_radix(token, 16).map_err(|_| CodecError::invalid_hex(token))
}

/// Parses whitespace-separated hex tokens into bytes.
///
/// Blank input yields an empty vector.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] naming the first bad token.
pub fn parse_hex_bytes(text: &str) -> CodecResult<Vec<u8>> {
    text.split_whitespace().map(parse_hex_byte).collect()
}

/// Formats bytes as upper-case, space-separated hex pairs.
#[must_use]
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02X}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_case() {
        assert_eq!(
            parse_hex_bytes("DE AD be ef").unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
    }

    #[test]
    fn parse_single_digits_and_extra_space() {
        assert_eq!(parse_hex_bytes("  7\tf  0a ").unwrap(), vec![0x07, 0x0F, 0x0A]);
    }

    #[test]
    fn parse_blank_is_empty() {
        assert!(parse_hex_bytes("   ").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert_eq!(
            parse_hex_bytes("DE ADBE"),
            Err(CodecError::invalid_hex("ADBE"))
        );
        assert!(parse_hex_byte("zz").is_err());
        assert!(parse_hex_byte("+1").is_err());
        assert!(parse_hex_byte("").is_err());
    }

    #[test]
    fn format_pairs() {
        assert_eq!(format_hex(&[0x00, 0x0A, 0xFF]), "00 0A FF");
        assert_eq!(format_hex(&[]), "");
    }
}
