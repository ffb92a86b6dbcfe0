//! ggms CLI
//!
//! Command-line interface for inferring MongoDB collection schemas

use clap::Parser;
use ggms::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so rendered output stays clean
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        if e.is_config() {
            eprintln!("Run `ggms init` to create a config file, or pass --config_path");
        }
        std::process::exit(1);
    }
}
