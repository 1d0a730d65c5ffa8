//! Contact Manager - Main entry point
//!
//! Reads delimited contact records from a file (or stdin), adds each one to
//! a fresh registry, and prints the resulting contacts as JSON on stdout.
//! Rejected records are logged to stderr and skipped.

use anyhow::{Context, Result};
use contact_manager::{read_delimited, Config, ContactRegistry};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only, stdout carries the JSON snapshot)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let path = std::env::args().nth(1);
    let rows = match &path {
        Some(path) => {
            info!("Reading contacts from {}", path);
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            read_delimited(BufReader::new(file), config.delimiter)?
        }
        None => {
            info!("Reading contacts from stdin");
            read_delimited(io::stdin().lock(), config.delimiter)?
        }
    };

    let mut registry = ContactRegistry::with_policy(config.validation_policy);
    let rejected = registry.ingest(&rows);

    for rejection in &rejected {
        warn!(line = rejection.line, "Skipping record: {}", rejection.error);
    }

    info!(
        "Ingested {} contacts ({} rejected, policy: {})",
        registry.len(),
        rejected.len(),
        registry.policy()
    );

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, registry.get_all_contacts())
        .context("Failed to write contacts")?;
    writeln!(stdout)?;

    Ok(())
}
