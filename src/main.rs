//! Contact Normalizer - Main entry point
//!
//! Reads a file of free-form contact lines and writes the normalized JSON
//! result set.

use anyhow::{Context, Result};
use clap::Parser;
use contact_normalizer::{Config, ConfigOverrides, OrderRule};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "contact-normalizer",
    about = "Normalize free-form contact records into a sorted JSON document"
)]
struct Cli {
    /// Text file with one contact record per line.
    input: PathBuf,

    /// Path of the JSON document to write.
    output: PathBuf,

    /// Rule for detecting (last, first) names: trailing-zip or preserve.
    #[arg(long)]
    order_rule: Option<OrderRule>,

    /// Write JSON without indentation.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        order_rule: cli.order_rule,
        pretty_output: cli.compact.then_some(false),
    };
    let config = Config::from_env_with(&overrides).context("Failed to load configuration")?;

    // Logs go to stderr so the output file is the only product of a run
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match contact_normalizer::run(&cli.input, &cli.output, &config) {
        Ok(result) => result,
        Err(e) => {
            error!("Normalization failed: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Wrote {} entries and {} errors to {}",
        result.entries().len(),
        result.errors().len(),
        cli.output.display()
    );

    Ok(())
}
