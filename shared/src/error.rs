//! Error types for the wrangler config generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating `wrangler.toml`.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the output file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Path of the file involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Write { path, .. } => path,
        }
    }
}
