//! Output rendering
//!
//! Two renderers, selected by [`OutputFormat`]:
//! - `TableRenderer` - bordered text table of internal labels
//! - `JsonRenderer` - array of `{name, type}` records using JSON labels

mod renderers;

pub use renderers::{JsonRenderer, TableRenderer};

use crate::error::Result;
use crate::schema::SchemaMap;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON array
    Json,
}

impl OutputFormat {
    /// `"json"` selects JSON; anything else, including nothing, is a table
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Turns a schema map into user-visible text
pub trait Renderer: Send + Sync {
    /// Render the schema
    fn render(&self, schema: &SchemaMap) -> Result<String>;
}

/// Renderer for the given format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Table => Box::new(TableRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}
