//! Crate-level error type.

use std::path::PathBuf;

use crate::theme::StoreError;

/// Errors surfaced by configuration loading and page rendering.
///
/// Theme resolution itself never fails; store errors only show up here when
/// a caller opens a store directly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
