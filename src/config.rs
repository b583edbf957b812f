//! TOML configuration.
//!
//! ```toml
//! [preference]
//! key = "theme"
//! store = "/home/me/.local/share/modern-gui/preferences.json"
//!
//! [page]
//! brand = "Acme"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::render::LandingPage;
use crate::theme::{FileStore, DEFAULT_STORAGE_KEY};

/// Where and under which key the theme choice is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    pub key: String,
    /// Explicit store file; defaults to [`FileStore::default_path`].
    pub store: Option<PathBuf>,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            store: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preference: PreferenceConfig,
    pub page: LandingPage,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, Error> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The store file to use, if any location is available.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.preference.store.clone().or_else(FileStore::default_path)
    }
}
