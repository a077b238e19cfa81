//! Document type for docket stores
//!
//! A [`Document`] is the value side of every store entry: a top-level JSON
//! object with string-keyed fields of arbitrarily nested heterogeneous
//! values. The JSON representation itself comes from `serde_json`; this
//! module wraps its map type behind the narrow contract the store relies on
//! (parse, print, field access) without re-modelling JSON.
//!
//! # Text encoding
//!
//! Documents print in two forms:
//! - compact ([`Document::to_json_string`]) for diagnostics,
//! - 4-space indented ([`Document::to_json_string_indented`]) for the
//!   flat-text record format.
//!
//! The indented form must stay parseable after its line breaks are deleted,
//! because record bodies are concatenated without separators when a store is
//! read back from text. serde_json output has this property: JSON gives no
//! syntactic meaning to newlines, and newlines inside string literals are
//! escaped.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fmt;

/// Indentation unit for the persisted document form: four spaces.
pub const INDENT: &[u8] = b"    ";

/// A JSON document: the value stored under every key of a store.
///
/// Newtype around `serde_json::Map<String, Value>` providing:
/// - parsing and printing through serde_json (the document library)
/// - field-level access for the store's field operations
/// - equality by field set and value, independent of field order
///
/// # Examples
///
/// ```
/// use docket_core::Document;
///
/// let mut doc = Document::parse(r#"{"age": 30}"#).unwrap();
/// assert_eq!(doc.get("age"), Some(&serde_json::json!(30)));
///
/// doc.insert("name", serde_json::json!("alice"));
/// assert_eq!(doc.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Document(Map::new())
    }

    /// Parse a document from JSON text.
    ///
    /// Fails with the document library's own error when the text is not
    /// valid JSON or its top level is not an object.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Build a document from a JSON value, if that value is an object.
    ///
    /// Returns `None` for scalars and arrays; a document is always an
    /// object at the top level.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Document(map)),
            _ => None,
        }
    }

    /// Look up a field. Absent fields are `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning the previous value if the field existed.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a field, returning its value if the field existed.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Whether the document has a field with this name.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Borrow the underlying serde_json map.
    pub fn as_inner(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the document, returning the underlying serde_json map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Serialize to compact JSON text.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to the 4-space-indented JSON text used by the record
    /// format.
    ///
    /// Falls back to the compact form if the pretty serializer reports an
    /// error, which cannot happen for an in-memory map.
    pub fn to_json_string_indented(&self) -> String {
        let mut out = Vec::with_capacity(128);
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        if self.0.serialize(&mut ser).is_err() {
            return self.to_json_string();
        }
        String::from_utf8(out).unwrap_or_else(|_| self.to_json_string())
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Document(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string_indented())
    }
}
