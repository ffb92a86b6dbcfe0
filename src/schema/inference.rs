//! Folding representative documents into a schema map

use super::types::{Document, SchemaMap};

/// Merges field observations from a sequence of documents.
///
/// Later observations of a field overwrite earlier ones; conflicting types
/// are not reported.
#[derive(Debug, Clone, Default)]
pub struct SchemaMerger {
    schema: SchemaMap,
}

impl SchemaMerger {
    /// Create a merger with an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document into the schema
    pub fn merge(&mut self, document: &Document) {
        for (name, value) in document.iter() {
            self.schema.set(name, value.type_label());
        }
    }

    /// Consume the merger and return the schema
    pub fn finish(self) -> SchemaMap {
        self.schema
    }
}

/// Merge a sequence of documents in order
pub fn merge_documents<'a, I>(documents: I) -> SchemaMap
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut merger = SchemaMerger::new();
    for document in documents {
        merger.merge(document);
    }
    merger.finish()
}
