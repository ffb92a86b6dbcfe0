//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{init_config, resolve_config_path, Settings};
use crate::engine::SchemaEngine;
use crate::error::Result;
use crate::render::{renderer_for, OutputFormat};
use crate::store::MongoStore;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Init { config_path } => self.init(config_path.as_deref()),
            Commands::Run {
                config_path,
                output_format,
            } => {
                self.infer(config_path.as_deref(), output_format.as_deref())
                    .await
            }
        }
    }

    /// Create the config file
    fn init(&self, config_path: Option<&Path>) -> Result<()> {
        let path = resolve_config_path(config_path)?;
        init_config(&path)?;
        println!("config file created at: {}", path.display());
        Ok(())
    }

    /// Infer the schema and print it
    async fn infer(&self, config_path: Option<&Path>, output_format: Option<&str>) -> Result<()> {
        let path = resolve_config_path(config_path)?;
        let settings = Settings::load(&path)?;
        let format = OutputFormat::parse(output_format);

        let store = MongoStore::connect(&settings).await?;
        tracing::debug!(
            collection = store.collection_name(),
            key = %settings.key_column,
            "Starting inference"
        );
        let engine = SchemaEngine::new(store, settings.key_column.as_str());
        let schema = engine.run().await?;

        let output = renderer_for(format).render(&schema)?;
        print!("{output}");
        Ok(())
    }
}
