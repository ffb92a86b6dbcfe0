//! MongoDB-backed store

use super::DocumentStore;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::schema::Document;
use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document as BsonDocument};
use mongodb::{Client, Collection};

/// Store backed by a MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoStore {
    collection: Collection<BsonDocument>,
}

impl MongoStore {
    /// Wrap an existing collection handle
    pub fn new(collection: Collection<BsonDocument>) -> Self {
        Self { collection }
    }

    /// Connect using the URI, database and collection from settings
    pub async fn connect(settings: &Settings) -> Result<Self> {
        if settings.database.is_empty() {
            return Err(Error::invalid_value(
                "MONGO_DATABASE_NAME",
                "database name must not be empty",
            ));
        }
        if settings.collection.is_empty() {
            return Err(Error::invalid_value(
                "MONGO_COLLECTION_NAME",
                "collection name must not be empty",
            ));
        }

        let client = Client::with_uri_str(&settings.uri).await?;
        tracing::info!(
            database = %settings.database,
            collection = %settings.collection,
            "MongoDB client created"
        );

        let collection = client
            .database(&settings.database)
            .collection::<BsonDocument>(&settings.collection);
        Ok(Self::new(collection))
    }

    /// Name of the underlying collection
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn distinct(&self, field: &str) -> Result<Vec<Bson>> {
        let values = self.collection.distinct(field, doc! {}).await?;
        Ok(values)
    }

    async fn find_latest(&self, field: &str, value: &Bson) -> Result<Option<Document>> {
        let mut filter = BsonDocument::new();
        filter.insert(field, value.clone());
        let found = self
            .collection
            .find_one(filter)
            .sort(doc! { "_id": -1 })
            .await?;
        Ok(found.map(Document::from))
    }
}
