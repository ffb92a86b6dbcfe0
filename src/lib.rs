//! # ggms
//!
//! Infers an approximate flat schema for a MongoDB collection.
//!
//! Instead of scanning every record, ggms reads the distinct values of a
//! configured key field and samples the most recent document for each one.
//! The field names and coarse value types of those samples are merged into a
//! single schema map and rendered as a table or as JSON.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ggms::config::Settings;
//! use ggms::engine::SchemaEngine;
//! use ggms::render::{renderer_for, OutputFormat};
//! use ggms::store::MongoStore;
//!
//! #[tokio::main]
//! async fn main() -> ggms::Result<()> {
//!     let settings = Settings::load("/home/me/.config/ggms/.env")?;
//!     let store = MongoStore::connect(&settings).await?;
//!     let schema = SchemaEngine::new(store, settings.key_column.as_str()).run().await?;
//!     print!("{}", renderer_for(OutputFormat::Json).render(&schema)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   DocumentStore ──► Sampler ──► SchemaMerger ──► Renderer
//!   distinct()        one doc     field → label    table / json
//!   find_latest()     per value
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]

/// Error types
pub mod error;

/// Settings file handling
pub mod config;

/// Value model, type labels and merging
pub mod schema;

/// Document store access
pub mod store;

/// Sampling and inference
pub mod engine;

/// Table and JSON output
pub mod render;

/// Command-line interface
pub mod cli;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
