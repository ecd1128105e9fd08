//! Generates `wrangler.toml` for the poem bot worker from environment variables.
//!
//! Reads `.env` from the working directory when present; variables already
//! set in the process environment take precedence.

use std::path::PathBuf;

use anyhow::Context;
use shared::{generate, Config, OUTPUT_FILE};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

/// What happened when loading `.env`.
#[derive(Debug)]
enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    /// Lines before the bad one have already been applied.
    Invalid(dotenvy::Error),
}

impl From<dotenvy::Result<PathBuf>> for DotenvStatus {
    fn from(result: dotenvy::Result<PathBuf>) -> Self {
        match result {
            Ok(path) => DotenvStatus::Loaded(path),
            Err(e) if e.not_found() => DotenvStatus::Missing,
            Err(e) => DotenvStatus::Invalid(e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // .env may set RUST_LOG
    let dotenv = DotenvStatus::from(dotenvy::dotenv());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        DotenvStatus::Loaded(path) => debug!(path = %path.display(), "Loaded .env"),
        DotenvStatus::Missing => debug!("No .env file found"),
        DotenvStatus::Invalid(e) => warn!(error = %e, "Failed to parse .env, continuing"),
    }

    let config = Config::from_env();
    generate(&config, OUTPUT_FILE)
        .inspect_err(|e| error!(path = %e.path().display(), "Could not write wrangler config"))
        .context("Failed to generate wrangler config")?;

    Ok(())
}
