//! Text encodings used to decode and encode file contents
//!
//! Labels follow the WHATWG Encoding Standard (`utf-8`, `windows-1251`,
//! `latin1`, `utf-16le`, ...), plus a few common aliases.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use serde::{Deserialize, Serialize};

use crate::errors::{FilekitError, Result};

/// Aliases that are common in the wild but are not WHATWG labels.
const ALIASES: &[(&str, &str)] = &[
    ("latin-1", "latin1"),
    ("utf8", "utf-8"),
    ("utf_8", "utf-8"),
    ("cp-1251", "windows-1251"),
];

/// A named text encoding, UTF-8 by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// UTF-8, the default encoding
    pub fn utf8() -> Self {
        TextEncoding(UTF_8)
    }

    /// Look up an encoding by label (case-insensitive).
    ///
    /// # Errors
    /// * `UnsupportedEncoding` - If the label is unknown
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim().to_ascii_lowercase();
        let resolved = ALIASES
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map(|(_, target)| *target)
            .unwrap_or(trimmed.as_str());

        match Encoding::for_label(resolved.as_bytes()) {
            Some(encoding) if encoding != encoding_rs::REPLACEMENT => Ok(TextEncoding(encoding)),
            _ => Err(FilekitError::UnsupportedEncoding(label.to_string())),
        }
    }

    /// Canonical name of the encoding (e.g. `UTF-8`, `windows-1251`)
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode file bytes into a string.
    ///
    /// Decoding is strict and does not strip a byte order mark.
    ///
    /// # Errors
    /// * `Decode` - If the bytes are malformed for this encoding
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| {
                FilekitError::Decode(format!("content is not valid {}", self.name()))
            })
    }

    /// Encode a string into file bytes.
    ///
    /// # Errors
    /// * `Encode` - If the text contains characters this encoding cannot represent
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if self.0 == UTF_16LE {
            return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if self.0 == UTF_16BE {
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            return Err(FilekitError::Encode(format!(
                "text contains characters not representable in {}",
                self.name()
            )));
        }
        Ok(bytes.into_owned())
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::utf8()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = FilekitError;

    fn from_str(s: &str) -> Result<Self> {
        TextEncoding::from_label(s)
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = FilekitError;

    fn try_from(label: String) -> Result<Self> {
        TextEncoding::from_label(&label)
    }
}

impl From<TextEncoding> for String {
    fn from(encoding: TextEncoding) -> Self {
        encoding.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default(), TextEncoding::utf8());
        assert_eq!(TextEncoding::default().name(), "UTF-8");
    }

    #[test]
    fn test_from_label() {
        assert_eq!(TextEncoding::from_label("utf-8").unwrap(), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_label(" UTF-8 ").unwrap(), TextEncoding::utf8());
        assert_eq!(TextEncoding::from_label("utf8").unwrap(), TextEncoding::utf8());
        assert_eq!(
            TextEncoding::from_label("cp1251").unwrap().name(),
            "windows-1251"
        );
        assert_eq!(
            TextEncoding::from_label("latin-1").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = TextEncoding::from_label("klingon").unwrap_err();
        assert!(matches!(err, FilekitError::UnsupportedEncoding(_)));
        assert!("iso-2022-kr".parse::<TextEncoding>().is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_utf8() {
        let err = TextEncoding::utf8().decode(&[0x66, 0xff, 0x6f]).unwrap_err();
        assert!(matches!(err, FilekitError::Decode(_)));
    }

    #[test]
    fn test_decode_keeps_bom() {
        let text = TextEncoding::utf8().decode(b"\xEF\xBB\xBFhi").unwrap();
        assert_eq!(text, "\u{feff}hi");
    }

    #[test]
    fn test_single_byte_encoding() {
        let cp1251: TextEncoding = "windows-1251".parse().unwrap();
        let bytes = cp1251.encode("Имя").unwrap();
        assert_eq!(bytes, vec![0xC8, 0xEC, 0xFF]);
        assert_eq!(cp1251.decode(&bytes).unwrap(), "Имя");
    }

    #[test]
    fn test_encode_rejects_unmappable() {
        let cp1251: TextEncoding = "windows-1251".parse().unwrap();
        let err = cp1251.encode("日本").unwrap_err();
        assert!(matches!(err, FilekitError::Encode(_)));
    }

    #[test]
    fn test_utf16_encodes_directly() {
        let le: TextEncoding = "utf-16le".parse().unwrap();
        assert_eq!(le.encode("hi").unwrap(), vec![b'h', 0, b'i', 0]);
        assert_eq!(le.decode(&[b'h', 0, b'i', 0]).unwrap(), "hi");

        let be: TextEncoding = "utf-16be".parse().unwrap();
        assert_eq!(be.encode("hi").unwrap(), vec![0, b'h', 0, b'i']);
    }

    #[test]
    fn test_serde_as_label() {
        let json = serde_json::to_string(&TextEncoding::utf8()).unwrap();
        assert_eq!(json, "\"UTF-8\"");

        let parsed: TextEncoding = serde_json::from_str("\"windows-1251\"").unwrap();
        assert_eq!(parsed.name(), "windows-1251");

        assert!(serde_json::from_str::<TextEncoding>("\"nope\"").is_err());
    }
}
