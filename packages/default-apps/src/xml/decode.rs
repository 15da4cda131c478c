//! Decoding raw documents into UTF-8 text for parsing.
//!
//! `roxmltree` only parses `&str`, so documents stored in another encoding
//! are transcoded first. The encoding is taken from the byte order mark if
//! there is one, otherwise from the `encoding` pseudo-attribute of the XML
//! declaration, otherwise UTF-8 is assumed.

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::error::{DefaultAppsError, Result};

/// Encoding declared in `<?xml version="1.0" encoding="..."?>`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENCODING_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<\?xml\s[^>]*?\sencoding\s*=\s*["']([A-Za-z][A-Za-z0-9._:-]*)["']"#)
        .expect("valid regex")
});

/// Decode a raw document into UTF-8 text.
///
/// # Errors
/// `DefaultAppsError::UnknownEncoding` if the declared encoding is not
/// supported, `DefaultAppsError::Decode` if the bytes are not valid in the
/// detected encoding.
///
/// # Examples
/// ```
/// use default_apps::xml::decode_document;
///
/// let latin1 = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><name>Caf\xE9</name>";
/// let text = decode_document(latin1).unwrap();
/// assert!(text.ends_with("<name>Caf\u{e9}</name>"));
/// ```
pub fn decode_document(bytes: &[u8]) -> Result<String> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some(found) => found,
        None => (declared_encoding(bytes)?.unwrap_or(UTF_8), 0),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or(DefaultAppsError::Decode {
            encoding: encoding.name(),
        })
}

/// Look up the encoding named by the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Result<Option<&'static Encoding>> {
    let Some(caps) = ENCODING_DECL.captures(bytes) else {
        return Ok(None);
    };

    let label = &caps[1];
    Encoding::for_label(label).map(Some).ok_or_else(|| {
        DefaultAppsError::UnknownEncoding(String::from_utf8_lossy(label).into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_without_declaration() {
        let text = decode_document("<name>Dateimanager für MATE</name>".as_bytes()).unwrap();
        assert_eq!(text, "<name>Dateimanager für MATE</name>");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let text = decode_document(b"\xEF\xBB\xBF<name>Caja</name>").unwrap();
        assert_eq!(text, "<name>Caja</name>");
    }

    #[test]
    fn test_latin1_declaration() {
        let bytes = b"<?xml version='1.0' encoding='iso-8859-1'?><name>Visionneur d'images \xE9</name>";
        let text = decode_document(bytes).unwrap();
        assert!(text.ends_with("<name>Visionneur d'images \u{e9}</name>"));
    }

    #[test]
    fn test_utf16le_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "<name>Pluma \u{e9}</name>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let text = decode_document(&bytes).unwrap();
        assert_eq!(text, "<name>Pluma \u{e9}</name>");
    }

    #[test]
    fn test_bom_overrides_declaration() {
        let bytes = b"\xEF\xBB\xBF<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><name>\xC3\xA9</name>";
        let text = decode_document(bytes).unwrap();
        assert!(text.ends_with("<name>\u{e9}</name>"));
    }

    #[test]
    fn test_encoding_outside_declaration_is_ignored() {
        let bytes = b"<name encoding=\"ISO-8859-1\">\xC3\xA9</name>";
        let text = decode_document(bytes).unwrap();
        assert_eq!(text, "<name encoding=\"ISO-8859-1\">\u{e9}</name>");
    }

    #[test]
    fn test_unknown_encoding() {
        let err = decode_document(b"<?xml version=\"1.0\" encoding=\"x-klingon\"?><a/>")
            .unwrap_err();
        assert!(matches!(err, DefaultAppsError::UnknownEncoding(label) if label == "x-klingon"));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = decode_document(b"<name>\xE9</name>").unwrap_err();
        assert!(matches!(err, DefaultAppsError::Decode { encoding: "UTF-8" }));
    }
}
