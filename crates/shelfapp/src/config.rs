//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which handles layered
//! loading from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **CLI override**: `shelf --file <path>` (applied by [`crate::init`]).
//! 2. **Environment variables**: `SHELF_DATA_FILE`.
//! 3. **Config file**: `shelf.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `biblioteca.json` | Catalog file; relative paths resolve against the working directory |

use crate::error::{Result, ShelfError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shelf.toml";
pub const DEFAULT_DATA_FILE: &str = "biblioteca.json";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Path of the catalog file.
    #[config(default = "biblioteca.json", env = "SHELF_DATA_FILE")]
    pub data_file: PathBuf,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl ShelfConfig {
    /// Load from the environment and, if given, a TOML file.
    /// A config file that does not exist is skipped.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// `shelf.toml` inside the user's config directory, when one exists.
    pub fn default_config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "shelf", "shelf").map(|d| d.config_dir().join(CONFIG_FILENAME))
    }

    /// The catalog path, resolved against `cwd` when relative.
    pub fn data_file_in(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}
