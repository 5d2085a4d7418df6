//! JSON text <-> document conversion.
//!
//! Output is pretty-printed with a configurable number of spaces and ends with
//! a single newline. `serde_json` writes non-ASCII characters as literal UTF-8,
//! so translated text stays readable in the files.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use locrec_types::{Document, Node};

use crate::error::{StoreError, StoreResult};

/// Indentation used by the existing locale files.
pub const DEFAULT_INDENT: usize = 4;

const BOM: char = '\u{feff}';

/// Parse JSON text into a document. A leading byte-order mark is ignored.
pub fn decode(text: &str) -> Result<Document, serde_json::Error> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let root: Node = serde_json::from_str(text)?;
    Ok(Document::new(root))
}

/// Render a document as indented JSON text.
pub fn encode(document: &Document, indent: usize) -> StoreResult<String> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    document
        .serialize(&mut serializer)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| StoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_uses_requested_indent() {
        let doc = Document::from(json!({"a": {"b": 1}}));
        let text = encode(&doc, 4).unwrap();
        assert_eq!(text, "{\n    \"a\": {\n        \"b\": 1\n    }\n}\n");

        let two = encode(&doc, 2).unwrap();
        assert!(two.contains("\n  \"a\""));
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let doc = Document::from(json!({"zh": "繁體中文", "fr": "Français"}));
        let text = encode(&doc, 4).unwrap();
        assert!(text.contains("繁體中文"));
        assert!(text.contains("Français"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn decode_keeps_document_order() {
        let doc = decode(r#"{"b": 1, "a": 2}"#).unwrap();
        let text = encode(&doc, 4).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
    }

    #[test]
    fn decode_strips_bom() {
        let doc = decode("\u{feff}{\"a\": 1}").unwrap();
        assert_eq!(doc, Document::from(json!({"a": 1})));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode("{not json").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn round_trip_is_stable() {
        let doc = Document::from(json!({"seoPages": {"pages": {"x": {"title": "Ü"}}}, "n": [1, 2]}));
        let once = encode(&doc, 4).unwrap();
        let twice = encode(&decode(&once).unwrap(), 4).unwrap();
        assert_eq!(once, twice);
    }
}
