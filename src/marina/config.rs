//! # Configuration
//!
//! Marina configuration is managed by [`confique`], which layers environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `MARINA_CATALOG`, `MARINA_SEARCH_PATH`, `MARINA_SITE_URL`.
//! 2. **Config file**: `--config <path>`, or `marina.toml` in the OS config
//!    directory (via `directories`). A missing file is not an error.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | none | Catalog JSON file (`{ locations, boatTypes, products }`) |
//! | `search_path` | `/search` | Route of the search page |
//! | `site_url` | `http://localhost:5173` | Base for shareable links |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "marina.toml";
const DEFAULT_SEARCH_PATH: &str = "/search";
const DEFAULT_SITE_URL: &str = "http://localhost:5173";

/// Configuration for marina, stored in `marina.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarinaConfig {
    /// Path to the catalog JSON document.
    #[config(env = "MARINA_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Route of the search page. Criteria are only written to the URL there.
    #[config(default = "/search", env = "MARINA_SEARCH_PATH")]
    pub search_path: String,

    /// Site base used to turn routes into shareable links.
    #[config(default = "http://localhost:5173", env = "MARINA_SITE_URL")]
    pub site_url: String,
}

impl Default for MarinaConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl MarinaConfig {
    /// Load from the environment and `path`, falling back to the user config file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.map(Path::to_path_buf).or_else(default_config_path);
        let mut builder = MarinaConfig::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        let mut config = builder.load()?;
        config.search_path = normalize_path(&config.search_path);
        Ok(config)
    }
}

/// `marina.toml` in the OS config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "marina", "marina").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
