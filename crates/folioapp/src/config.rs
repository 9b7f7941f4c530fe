//! # Configuration
//!
//! Folio configuration is managed by [`confique`], which handles layered loading
//! from environment variables, a TOML file, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FOLIO_STORAGE_KEY`, `FOLIO_SEED_SAMPLES`, `FOLIO_DATA_DIR`.
//! 2. **Config file**: `folio.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `portfolio_projects` | Key the catalog is stored under |
//! | `seed_samples` | `true` | Fill an empty catalog with sample projects on startup |
//! | `data_dir` | platform data dir | Where the storage files live |

use crate::error::{FolioError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Key the project list is persisted under.
    #[config(env = "FOLIO_STORAGE_KEY", default = "portfolio_projects")]
    pub storage_key: String,

    /// Seed sample projects into an empty catalog.
    #[config(env = "FOLIO_SEED_SAMPLES", default = true)]
    pub seed_samples: bool,

    /// Directory holding the storage files. When absent, the platform data dir is used.
    #[config(env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_samples: true,
            data_dir: None,
        }
    }
}

impl FolioConfig {
    /// Loads env vars over `{config_dir}/folio.toml` over defaults.
    /// A missing file is fine; a malformed one is an error.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| FolioError::Config(e.to_string()))
    }

    /// The data directory: configured one, else the platform default.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        platform_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| FolioError::Config("Could not determine data directory".to_string()))
    }

    /// A commented sample `folio.toml`.
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            "# Key the project list is stored under\nstorage_key = \"{}\"\n\n\
             # Fill an empty catalog with sample projects\nseed_samples = {}\n\n\
             # Where the storage files live\n# data_dir = \"/path/to/data\"\n",
            defaults.storage_key, defaults.seed_samples
        )
    }
}

pub fn platform_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "folio", "folio")
}

/// The platform config directory, used to find `folio.toml`.
pub fn default_config_dir() -> Option<PathBuf> {
    platform_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}
