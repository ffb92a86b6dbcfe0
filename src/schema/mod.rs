//! Schema module
//!
//! Value model, type labels and the merger that folds representative
//! documents into a flat schema map.
//!
//! # Labels
//!
//! | Value shape     | Internal label | JSON label |
//! |-----------------|----------------|------------|
//! | text            | `text`         | `string`   |
//! | number          | `number`       | `string`   |
//! | embedded doc    | `document`     | `object`   |
//! | array           | `array`        | `array`    |
//! | anything else   | store kind     | `string`   |

mod inference;
mod types;

pub use inference::{merge_documents, SchemaMerger};
pub use types::{Document, ExternalType, FieldValue, SchemaMap, TypeLabel};
