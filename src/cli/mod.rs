//! CLI module
//!
//! # Commands
//!
//! - `init` - Write a default settings file
//! - `run` - Infer and print the collection schema

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
