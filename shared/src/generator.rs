//! Writes the rendered document to disk.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::{Config, Error, Result, WranglerDocument};

/// Output path, relative to the working directory.
pub const OUTPUT_FILE: &str = "wrangler.toml";

/// Write `document` to `path`, replacing whatever was there.
pub fn write_document(path: impl AsRef<Path>, document: &WranglerDocument) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document.render()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the document from `config` and write it to `path`.
///
/// Unset variables are not an error; they are logged and rendered empty.
pub fn generate(config: &Config, path: impl AsRef<Path>) -> Result<WranglerDocument> {
    let path = path.as_ref();

    for name in config.missing() {
        warn!(variable = name, "Environment variable not set, writing empty value");
    }

    let document = WranglerDocument::from_config(config);
    write_document(path, &document)?;

    info!(path = %path.display(), "Generated wrangler config");
    Ok(document)
}
