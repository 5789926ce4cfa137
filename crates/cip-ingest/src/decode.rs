//! Byte-level decoding of source exports.
//!
//! The public reference export ships as UTF-16 with a BOM; hand-edited copies
//! are usually UTF-8. A BOM always wins over the requested encoding.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use tracing::warn;

use crate::options::SourceEncoding;

/// Decoded file content.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    /// Name of the encoding used, as reported by `encoding_rs`.
    pub encoding: &'static str,
}

/// Decodes raw file bytes. Malformed sequences are replaced, never rejected.
pub fn decode_source(bytes: &[u8], requested: SourceEncoding) -> Decoded {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (resolve(bytes, requested), bytes),
    };
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "malformed byte sequences replaced while decoding"
        );
    }
    Decoded {
        text: text.into_owned(),
        encoding: encoding.name(),
    }
}

fn resolve(bytes: &[u8], requested: SourceEncoding) -> &'static Encoding {
    match requested {
        SourceEncoding::Utf8 => UTF_8,
        SourceEncoding::Utf16Le => UTF_16LE,
        SourceEncoding::Utf16Be => UTF_16BE,
        SourceEncoding::Auto if looks_like_utf16le(bytes) => UTF_16LE,
        SourceEncoding::Auto => UTF_8,
    }
}

/// ASCII text stored as UTF-16 LE has a zero in every odd byte.
fn looks_like_utf16le(bytes: &[u8]) -> bool {
    let sample_len = bytes.len().min(64) & !1;
    if sample_len < 2 {
        return false;
    }
    let sample = &bytes[..sample_len];
    let odd_zero = sample.iter().skip(1).step_by(2).all(|b| *b == 0);
    let even_text = sample.iter().step_by(2).any(|b| *b != 0);
    odd_zero && even_text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = if bom { vec![0xFF, 0xFE] } else { Vec::new() };
        bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
        bytes
    }

    #[test]
    fn utf16_bom_is_detected() {
        let decoded = decode_source(&utf16le("CodeCIP13;Qte", true), SourceEncoding::Auto);
        assert_eq!(decoded.text, "CodeCIP13;Qte");
        assert_eq!(decoded.encoding, "UTF-16LE");
    }

    #[test]
    fn bom_wins_over_requested_encoding() {
        let decoded = decode_source(&utf16le("A;B", true), SourceEncoding::Utf8);
        assert_eq!(decoded.text, "A;B");
    }

    #[test]
    fn bomless_utf16_is_sniffed() {
        let decoded = decode_source(&utf16le("CodeCIP;Qte", false), SourceEncoding::Auto);
        assert_eq!(decoded.text, "CodeCIP;Qte");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_source("\u{feff}CodeCIP;Qte".as_bytes(), SourceEncoding::Auto);
        assert_eq!(decoded.text, "CodeCIP;Qte");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = decode_source(b"A\xFFB", SourceEncoding::Utf8);
        assert_eq!(decoded.text, "A\u{fffd}B");
    }
}
