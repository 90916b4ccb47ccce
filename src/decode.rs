use encoding_rs::{UTF_16BE, UTF_16LE, WINDOWS_1252};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Categories for recoverable decoding issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    /// Input was not UTF-8 and was transcoded.
    Transcoded,
    /// Input contained sequences replaced with U+FFFD.
    Lossy,
}

/// A recoverable issue encountered while decoding input text.
#[derive(Debug, Clone)]
pub struct DecodeWarning {
    pub code: WarningCode,
    pub message: String,
}

/// Decode raw bytes into text for justification.
///
/// UTF-8 is taken as-is (BOM stripped). UTF-16 with a BOM is transcoded, and
/// anything else that is not valid UTF-8 falls back to Windows-1252. Both
/// fallbacks report a warning.
pub fn decode_text(data: &[u8]) -> (String, Option<DecodeWarning>) {
    if let Some(rest) = data.strip_prefix(UTF8_BOM) {
        return decode_utf8_or_fallback(rest);
    }

    for (bom, encoding) in [(UTF16_LE_BOM, UTF_16LE), (UTF16_BE_BOM, UTF_16BE)] {
        if let Some(rest) = data.strip_prefix(bom) {
            let (text, had_errors) = encoding.decode_without_bom_handling(rest);
            let warning = DecodeWarning {
                code: if had_errors {
                    WarningCode::Lossy
                } else {
                    WarningCode::Transcoded
                },
                message: format!("decoded input as {}", encoding.name()),
            };
            return (text.into_owned(), Some(warning));
        }
    }

    decode_utf8_or_fallback(data)
}

fn decode_utf8_or_fallback(data: &[u8]) -> (String, Option<DecodeWarning>) {
    match std::str::from_utf8(data) {
        Ok(text) => (text.to_string(), None),
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_1252.decode(data);
            let warning = DecodeWarning {
                code: if had_errors {
                    WarningCode::Lossy
                } else {
                    WarningCode::Transcoded
                },
                message: "input is not valid UTF-8; decoded as windows-1252".to_string(),
            };
            (text.into_owned(), Some(warning))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        let (text, warning) = decode_text("Hello 🌍 World".as_bytes());
        assert_eq!(text, "Hello 🌍 World");
        assert!(warning.is_none());
    }

    #[test]
    fn test_decode_empty() {
        let (text, warning) = decode_text(b"");
        assert_eq!(text, "");
        assert!(warning.is_none());
    }

    #[test]
    fn test_decode_utf8_bom_stripped() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(b"BOM content");
        let (text, warning) = decode_text(&input);
        assert_eq!(text, "BOM content");
        assert!(warning.is_none());
    }

    #[test]
    fn test_decode_windows_1252_fallback() {
        let (text, warning) = decode_text(b"caf\xe9 au lait");
        assert_eq!(text, "café au lait");
        assert_eq!(warning.unwrap().code, WarningCode::Transcoded);
    }

    #[test]
    fn test_decode_utf16_le() {
        let input: Vec<u8> = vec![0xFF, 0xFE, b'H', 0x00, b'i', 0x00];
        let (text, warning) = decode_text(&input);
        assert_eq!(text, "Hi");
        assert!(warning.is_some());
    }

    #[test]
    fn test_decode_utf16_unpaired_surrogate_is_lossy() {
        let input: Vec<u8> = vec![0xFF, 0xFE, 0x00, 0xD8];
        let (text, warning) = decode_text(&input);
        assert_eq!(text, "\u{FFFD}");
        assert_eq!(warning.unwrap().code, WarningCode::Lossy);
    }

    #[test]
    fn test_decode_utf16_be() {
        let input: Vec<u8> = vec![0xFE, 0xFF, 0x00, b'H', 0x00, b'i'];
        let (text, warning) = decode_text(&input);
        assert_eq!(text, "Hi");
        assert!(warning.unwrap().message.contains("UTF-16BE"));
    }
}
