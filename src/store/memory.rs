//! In-memory store

use super::DocumentStore;
use crate::error::Result;
use crate::schema::Document;
use async_trait::async_trait;
use mongodb::bson::{Bson, Document as BsonDocument};

/// Store over documents held in insertion order.
///
/// Distinct values come back in first-seen order and "latest" means the last
/// inserted match, mirroring a descending `_id` sort.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<BsonDocument>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document
    pub fn insert(&mut self, document: BsonDocument) {
        self.documents.push(document);
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<BsonDocument> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = BsonDocument>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn distinct(&self, field: &str) -> Result<Vec<Bson>> {
        let mut values: Vec<Bson> = Vec::new();
        for value in self.documents.iter().filter_map(|d| d.get(field)) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        Ok(values)
    }

    async fn find_latest(&self, field: &str, value: &Bson) -> Result<Option<Document>> {
        Ok(self
            .documents
            .iter()
            .rev()
            .find(|d| d.get(field) == Some(value))
            .cloned()
            .map(Document::from))
    }
}
