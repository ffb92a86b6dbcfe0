//! Representative document sampling

use crate::error::{Error, Result};
use crate::schema::Document;
use crate::store::DocumentStore;

/// Picks the latest document for every distinct value of a key field
pub struct Sampler<'a, S: ?Sized> {
    store: &'a S,
    key_field: &'a str,
}

impl<'a, S: DocumentStore + ?Sized> Sampler<'a, S> {
    /// Create a sampler for `key_field` over `store`
    pub fn new(store: &'a S, key_field: &'a str) -> Self {
        Self { store, key_field }
    }

    /// One document per distinct key value, in distinct-query order.
    ///
    /// A key value whose document can no longer be found fails the whole
    /// sample.
    pub async fn representatives(&self) -> Result<Vec<Document>> {
        let values = self.store.distinct(self.key_field).await?;
        tracing::debug!(
            field = self.key_field,
            count = values.len(),
            "Distinct key values"
        );

        let mut documents = Vec::with_capacity(values.len());
        for value in &values {
            let document = self
                .store
                .find_latest(self.key_field, value)
                .await?
                .ok_or_else(|| Error::vanished(self.key_field, value.to_string()))?;
            tracing::debug!(key = %value, fields = document.len(), "Sampled document");
            documents.push(document);
        }

        Ok(documents)
    }
}
