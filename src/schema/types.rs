//! Schema types

use mongodb::bson::{Bson, Document as BsonDocument};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Document values
// ============================================================================

/// A single field value taken from a document
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Document(Document),
    Array(Vec<FieldValue>),
    Null,
    /// Any other shape, carrying the store's name for it
    Other(String),
}

impl FieldValue {
    /// Coarse type label for this value
    pub fn type_label(&self) -> TypeLabel {
        match self {
            FieldValue::Text(_) => TypeLabel::Text,
            FieldValue::Number(_) => TypeLabel::Number,
            FieldValue::Document(_) => TypeLabel::Document,
            FieldValue::Array(_) => TypeLabel::Array,
            FieldValue::Boolean(_) => TypeLabel::Unrecognized("bool".to_string()),
            FieldValue::Null => TypeLabel::Unrecognized("null".to_string()),
            FieldValue::Other(kind) => TypeLabel::Unrecognized(kind.clone()),
        }
    }
}

impl From<Bson> for FieldValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Bson) -> Self {
        match value {
            Bson::String(s) => FieldValue::Text(s),
            Bson::Double(n) => FieldValue::Number(n),
            Bson::Int32(n) => FieldValue::Number(f64::from(n)),
            Bson::Int64(n) => FieldValue::Number(n as f64),
            Bson::Boolean(b) => FieldValue::Boolean(b),
            Bson::Document(doc) => FieldValue::Document(doc.into()),
            Bson::Array(items) => FieldValue::Array(items.into_iter().map(Into::into).collect()),
            Bson::Null | Bson::Undefined => FieldValue::Null,
            other => FieldValue::Other(format!("{:?}", other.element_type())),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or_default()),
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Object(map) => FieldValue::Document(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
            Value::Array(items) => FieldValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Null => FieldValue::Null,
        }
    }
}

/// An ordered mapping of unique field names to values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<(String, FieldValue)>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterate over fields in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a document from a JSON object; any other JSON value yields `None`
    pub fn from_json(value: Value) -> Option<Self> {
        match FieldValue::from(value) {
            FieldValue::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl FromIterator<(String, FieldValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (name, value) in iter {
            doc.insert(name, value);
        }
        doc
    }
}

impl From<BsonDocument> for Document {
    fn from(doc: BsonDocument) -> Self {
        doc.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect()
    }
}

// ============================================================================
// Type labels
// ============================================================================

/// Internal type label produced by the merger
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeLabel {
    Text,
    Number,
    Document,
    Array,
    Unrecognized(String),
}

impl TypeLabel {
    /// Map to the JSON output vocabulary.
    ///
    /// Numbers deliberately map to `string`, as does anything unrecognized.
    pub fn external(&self) -> ExternalType {
        match self {
            TypeLabel::Document => ExternalType::Object,
            TypeLabel::Array => ExternalType::Array,
            TypeLabel::Text | TypeLabel::Number | TypeLabel::Unrecognized(_) => {
                ExternalType::String
            }
        }
    }
}

impl std::fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeLabel::Text => write!(f, "text"),
            TypeLabel::Number => write!(f, "number"),
            TypeLabel::Document => write!(f, "document"),
            TypeLabel::Array => write!(f, "array"),
            TypeLabel::Unrecognized(kind) => write!(f, "{kind}"),
        }
    }
}

/// External type label used in JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalType {
    String,
    Object,
    Array,
}

impl std::fmt::Display for ExternalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalType::String => write!(f, "string"),
            ExternalType::Object => write!(f, "object"),
            ExternalType::Array => write!(f, "array"),
        }
    }
}

// ============================================================================
// Schema map
// ============================================================================

/// Flat mapping of field name to internal type label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaMap {
    fields: BTreeMap<String, TypeLabel>,
}

impl SchemaMap {
    /// Create an empty schema map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field type, overwriting any earlier observation
    pub(crate) fn set(&mut self, name: &str, label: TypeLabel) {
        self.fields.insert(name.to_string(), label);
    }

    /// Get the label for a field
    pub fn get(&self, name: &str) -> Option<&TypeLabel> {
        self.fields.get(name)
    }

    /// Whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over `(field, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeLabel)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were observed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, TypeLabel)> for SchemaMap {
    fn from_iter<I: IntoIterator<Item = (String, TypeLabel)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
