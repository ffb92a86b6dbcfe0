//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Get the schema of a MongoDB collection
#[derive(Parser, Debug)]
#[command(name = "ggms")]
#[command(author, version, about = "mongo schema util", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a config file at the given path, or at the default path
    Init {
        /// Config file path
        #[arg(short, long = "config_path", alias = "config-path")]
        config_path: Option<PathBuf>,
    },

    /// Infer the schema using the given config file, or the default one
    Run {
        /// Config file path
        #[arg(short, long = "config_path", alias = "config-path")]
        config_path: Option<PathBuf>,

        /// Output format ("json" for JSON, anything else for a table)
        #[arg(short, long = "output_format", alias = "output-format")]
        output_format: Option<String>,
    },
}
