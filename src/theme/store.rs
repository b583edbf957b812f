//! Durable key-value storage for the user's theme choice.
//!
//! The resolver talks to storage only through [`PreferenceStore`], so it can
//! run against the on-disk [`FileStore`] in the CLI and against a
//! [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Error raised by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access preference store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file exists but does not hold a JSON string map.
    #[error("malformed preference store at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The host has disabled persistence.
    #[error("preference storage is disabled")]
    Disabled,
}

/// A string key-value store that outlives a single session.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory preference store.
///
/// Clones share one backing map, so a clone handed to a resolver and a clone
/// kept by the caller observe the same entries. A new resolver built over a
/// clone therefore sees what an earlier session persisted.
///
/// # Example
///
/// ```rust
/// use modern_gui::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::new();
/// let mut handle = store.clone();
/// handle.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose host has switched persistence off.
    ///
    /// Reads find nothing and writes fail with [`StoreError::Disabled`].
    pub fn disabled() -> Self {
        Self {
            entries: Rc::default(),
            disabled: true,
        }
    }

    /// Builds a store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Disabled);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preference store persisted as a JSON object on disk.
///
/// The whole map is loaded on [`open`](FileStore::open) and rewritten on
/// every [`set`](PreferenceStore::set). Rewrites go to a temporary file in
/// the same directory which is then renamed over the store, so the file on
/// disk is always either the previous or the new complete map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// `set`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, and
    /// [`StoreError::Parse`] if it does not contain a JSON string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    /// Default location under the user's local data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("modern-gui").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let content = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
