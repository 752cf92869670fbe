//! Resolves where the catalog lives for this process.

use crate::config::ShelfConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ShelfContext {
    pub data_file: PathBuf,
    pub config: ShelfConfig,
}

/// Build the context from the working directory, an optional config file and
/// an optional explicit data file (the CLI `--file` flag), which wins.
pub fn initialize(
    cwd: &Path,
    config_file: Option<&Path>,
    data_override: Option<PathBuf>,
) -> Result<ShelfContext> {
    let config = ShelfConfig::load(config_file)?;
    let data_file = match data_override {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => config.data_file_in(cwd),
    };
    Ok(ShelfContext { data_file, config })
}
