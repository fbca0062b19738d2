// Fri Oct 16 2026 - Alex

use crate::error::{CliError, CliResult};
use log::info;
use std::fs;
use std::path::Path;

/// Writes `contents` to `path`, replacing whatever was there. Parent
/// directories must already exist.
pub fn write_artifact(path: &Path, contents: &str) -> CliResult<()> {
    fs::write(path, contents).map_err(|e| CliError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
