//! Shared library for the AWS Status Poem Bot tooling.
//!
//! Builds the worker's `wrangler.toml` from environment variables.

pub mod config;
pub mod error;
pub mod generator;
pub mod wrangler;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{generate, write_document, OUTPUT_FILE};
pub use wrangler::WranglerDocument;
