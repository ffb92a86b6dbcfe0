//! Renderer implementations

use super::Renderer;
use crate::error::{Error, Result};
use crate::schema::{ExternalType, SchemaMap};
use serde::Serialize;
use std::fmt::Write;

// ============================================================================
// Table Renderer
// ============================================================================

/// Bordered table with `NAME` and `TYPE` columns
#[derive(Debug, Clone, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Create a table renderer
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TableRenderer {
    fn render(&self, schema: &SchemaMap) -> Result<String> {
        let rows: Vec<(String, String)> = schema
            .iter()
            .map(|(name, label)| (name.to_string(), label.to_string()))
            .collect();

        let name_width = rows
            .iter()
            .map(|(n, _)| n.chars().count())
            .chain(std::iter::once("NAME".len()))
            .max()
            .unwrap_or_default();
        let type_width = rows
            .iter()
            .map(|(_, t)| t.chars().count())
            .chain(std::iter::once("TYPE".len()))
            .max()
            .unwrap_or_default();

        let border = format!(
            "+{}+{}+\n",
            "-".repeat(name_width + 2),
            "-".repeat(type_width + 2)
        );

        let mut out = String::new();
        out.push_str(&border);
        writeln!(out, "| {:<name_width$} | {:<type_width$} |", "NAME", "TYPE")
            .map_err(|e| Error::Other(e.to_string()))?;
        out.push_str(&border);
        for (name, label) in &rows {
            writeln!(out, "| {name:<name_width$} | {label:<type_width$} |")
                .map_err(|e| Error::Other(e.to_string()))?;
        }
        out.push_str(&border);
        Ok(out)
    }
}

// ============================================================================
// JSON Renderer
// ============================================================================

/// One output record
#[derive(Debug, Serialize)]
struct FieldRecord<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    field_type: ExternalType,
}

/// Compact JSON array of `{"name", "type"}` records
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a JSON renderer
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, schema: &SchemaMap) -> Result<String> {
        let records: Vec<FieldRecord<'_>> = schema
            .iter()
            .map(|(name, label)| FieldRecord {
                name,
                field_type: label.external(),
            })
            .collect();
        let mut out = serde_json::to_string(&records)?;
        out.push('\n');
        Ok(out)
    }
}
