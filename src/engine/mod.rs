//! Inference engine module
//!
//! Samples one representative document per distinct key value and merges
//! them into a [`SchemaMap`].
//!
//! Queries run one at a time; any store error aborts the run.

mod sampler;

pub use sampler::Sampler;

use crate::error::Result;
use crate::schema::{merge_documents, SchemaMap};
use crate::store::DocumentStore;

/// Schema inference over one collection
pub struct SchemaEngine<S> {
    /// Store to sample from
    store: S,
    /// Key field; empty disables sampling
    key_field: String,
}

impl<S: DocumentStore> SchemaEngine<S> {
    /// Create an engine over `store` partitioned by `key_field`
    pub fn new(store: S, key_field: impl Into<String>) -> Self {
        Self {
            store,
            key_field: key_field.into(),
        }
    }

    /// Get the store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sample and merge.
    ///
    /// With an empty key field no query is issued and the schema is empty.
    pub async fn run(&self) -> Result<SchemaMap> {
        if self.key_field.is_empty() {
            tracing::debug!("No key field configured, skipping sampling");
            return Ok(SchemaMap::new());
        }

        let documents = Sampler::new(&self.store, &self.key_field)
            .representatives()
            .await?;
        let schema = merge_documents(&documents);
        tracing::info!(
            documents = documents.len(),
            fields = schema.len(),
            "Schema inferred"
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests;
