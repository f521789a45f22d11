//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Command line**: applied by the binary on top of the loaded value.
//! 2. **Environment variables**: `NOTES_DATA_FILE`, `NOTES_HOST`, `PORT`.
//! 3. **Config file**: `notes.toml`, or the path given with `--config`.
//!    A missing file is skipped.
//! 4. **Compiled Defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `db/db.json` | JSON file holding every note |
//! | `host` | `0.0.0.0` | Address the HTTP server binds to |
//! | `port` | `3001` | Port the HTTP server binds to |

use crate::error::{NotesError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "notes.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// JSON file holding the note collection. Its directory is created on
    /// first save.
    #[config(env = "NOTES_DATA_FILE", default = "db/db.json")]
    pub data_file: PathBuf,

    #[config(env = "NOTES_HOST", default = "0.0.0.0")]
    pub host: String,

    #[config(env = "PORT", default = 3001)]
    pub port: u16,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("db/db.json"),
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl NotesConfig {
    /// Load from the environment, then `file` (or [`DEFAULT_CONFIG_FILE`]),
    /// then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        Self::builder()
            .env()
            .file(file)
            .load()
            .map_err(|e| NotesError::Config(e.to_string()))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
