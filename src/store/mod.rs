//! Document store module
//!
//! The engine talks to the collection through [`DocumentStore`], which exposes
//! just the two queries sampling needs.
//!
//! - `MongoStore` - a live MongoDB collection
//! - `MemoryStore` - insertion-ordered documents held in memory

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::Result;
use crate::schema::Document;
use async_trait::async_trait;
use mongodb::bson::Bson;

/// Query capability over one collection
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Distinct values taken by `field` across the whole collection
    async fn distinct(&self, field: &str) -> Result<Vec<Bson>>;

    /// Most recently inserted document with `field == value`, if any
    async fn find_latest(&self, field: &str, value: &Bson) -> Result<Option<Document>>;
}
