use std::borrow::Cow;

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

/// Decodes reference file bytes, preferring Windows-1252 and falling back to
/// UTF-8 when the legacy decode reports malformed input. A leading byte order
/// mark selects its own encoding.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (text, used, had_errors) = WINDOWS_1252.decode(bytes);
    if !had_errors {
        debug!(encoding = used.name(), len = bytes.len(), "decoded reference file");
        return text;
    }
    warn!(encoding = used.name(), "legacy decode failed, falling back to utf-8");
    let (text, _) = UTF_8.decode_with_bom_removal(bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_windows_1252_half_glyph() {
        let bytes = b"\xbd cup";
        assert_eq!(decode_text(bytes), "\u{bd} cup");
    }

    #[test]
    fn decodes_plain_ascii_unchanged() {
        assert_eq!(decode_text(b"fgid,food\nvf,Kale"), "fgid,food\nvf,Kale");
    }

    #[test]
    fn utf8_bom_switches_to_utf8() {
        let bytes = "\u{feff}fgid,food\nvf,Crème".as_bytes();
        assert_eq!(decode_text(bytes), "fgid,food\nvf,Crème");
    }

    #[test]
    fn malformed_utf8_after_bom_decodes_with_replacement() {
        let bytes = b"\xef\xbb\xbfvf,\xff cup";
        let text = decode_text(bytes);
        assert_eq!(text, "vf,\u{FFFD} cup");
        assert_eq!(crate::ingest::fix_encoding(&text), "vf,½ cup");
    }
}
