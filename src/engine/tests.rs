//! Tests for engine module

use super::*;
use crate::error::Error;
use crate::schema::{Document, TypeLabel};
use crate::store::MemoryStore;
use async_trait::async_trait;
use mongodb::bson::{doc, Bson};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Test stores
// ============================================================================

/// Counts every query and delegates to an inner store
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    queries: AtomicUsize,
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn distinct(&self, field: &str) -> Result<Vec<Bson>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.distinct(field).await
    }

    async fn find_latest(&self, field: &str, value: &Bson) -> Result<Option<Document>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_latest(field, value).await
    }
}

/// Reports distinct values whose documents are gone
struct VanishingStore;

#[async_trait]
impl DocumentStore for VanishingStore {
    async fn distinct(&self, _field: &str) -> Result<Vec<Bson>> {
        Ok(vec![Bson::from("ghost")])
    }

    async fn find_latest(&self, _field: &str, _value: &Bson) -> Result<Option<Document>> {
        Ok(None)
    }
}

/// Fails the find query for one specific value
struct FailingStore {
    inner: MemoryStore,
    fail_on: Bson,
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn distinct(&self, field: &str) -> Result<Vec<Bson>> {
        self.inner.distinct(field).await
    }

    async fn find_latest(&self, field: &str, value: &Bson) -> Result<Option<Document>> {
        if *value == self.fail_on {
            return Err(Error::Other("connection reset".to_string()));
        }
        self.inner.find_latest(field, value).await
    }
}

/// Fails the distinct query; any find is a bug
struct DistinctDownStore;

#[async_trait]
impl DocumentStore for DistinctDownStore {
    async fn distinct(&self, _field: &str) -> Result<Vec<Bson>> {
        Err(Error::Other("distinct down".to_string()))
    }

    async fn find_latest(&self, _field: &str, _value: &Bson) -> Result<Option<Document>> {
        panic!("find_latest called after distinct failed");
    }
}

fn event_store() -> MemoryStore {
    [
        doc! { "event": "click", "x": 1, "target": "button" },
        doc! { "event": "view", "url": "/home", "meta": { "ref": "ad" } },
        doc! { "event": "click", "x": 2, "path": ["a", "b"] },
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Sampler Tests
// ============================================================================

#[tokio::test]
async fn test_sampler_one_per_key_value() {
    let store = event_store();
    let docs = Sampler::new(&store, "event").representatives().await.unwrap();

    assert_eq!(docs.len(), 2);
    // Latest click wins over the earlier one
    assert!(docs[0].get("path").is_some());
    assert!(docs[0].get("target").is_none());
    assert!(docs[1].get("url").is_some());
}

#[tokio::test]
async fn test_sampler_empty_collection() {
    let store = MemoryStore::new();
    let docs = Sampler::new(&store, "event").representatives().await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn test_sampler_vanished_document_is_fatal() {
    let err = Sampler::new(&VanishingStore, "event")
        .representatives()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DocumentVanished { ref field, .. } if field == "event"));
}

// ============================================================================
// Engine Tests
// ============================================================================

#[tokio::test]
async fn test_run_merges_representatives() {
    let engine = SchemaEngine::new(event_store(), "event");
    let schema = engine.run().await.unwrap();

    let fields: Vec<_> = schema.iter().map(|(k, _)| k).collect();
    assert_eq!(fields, vec!["event", "meta", "path", "url", "x"]);
    assert_eq!(schema.get("event"), Some(&TypeLabel::Text));
    assert_eq!(schema.get("x"), Some(&TypeLabel::Number));
    assert_eq!(schema.get("meta"), Some(&TypeLabel::Document));
    assert_eq!(schema.get("path"), Some(&TypeLabel::Array));
    assert!(!schema.contains("target"));
}

#[tokio::test]
async fn test_run_last_write_wins_across_key_values() {
    let store: MemoryStore = [
        doc! { "kind": "a", "value": "text" },
        doc! { "kind": "b", "value": 10 },
    ]
    .into_iter()
    .collect();

    let schema = SchemaEngine::new(store, "kind").run().await.unwrap();
    assert_eq!(schema.get("value"), Some(&TypeLabel::Number));
}

#[tokio::test]
async fn test_run_without_key_field_issues_no_queries() {
    let store = CountingStore {
        inner: event_store(),
        ..Default::default()
    };
    let engine = SchemaEngine::new(store, "");

    let schema = engine.run().await.unwrap();

    assert!(schema.is_empty());
    assert_eq!(engine.store().queries.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_run_queries_sequentially_per_value() {
    let store = CountingStore {
        inner: event_store(),
        ..Default::default()
    };
    let engine = SchemaEngine::new(store, "event");
    engine.run().await.unwrap();

    // One distinct plus one find per distinct value
    assert_eq!(engine.store().queries.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_run_key_field_absent_is_empty() {
    let schema = SchemaEngine::new(event_store(), "missing")
        .run()
        .await
        .unwrap();
    assert!(schema.is_empty());
}

#[tokio::test]
async fn test_run_vanished_document_fails() {
    let result = SchemaEngine::new(VanishingStore, "event").run().await;
    assert!(matches!(result, Err(Error::DocumentVanished { .. })));
}

#[tokio::test]
async fn test_run_distinct_error_aborts() {
    let err = SchemaEngine::new(DistinctDownStore, "event")
        .run()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "distinct down");
}

#[tokio::test]
async fn test_run_store_error_aborts() {
    let store = FailingStore {
        inner: event_store(),
        fail_on: Bson::from("view"),
    };
    let err = SchemaEngine::new(store, "event").run().await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
}
