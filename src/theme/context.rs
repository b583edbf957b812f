//! Capabilities available to the resolver, probed once up front.

use std::path::Path;

use log::warn;

use super::ambient::{AmbientSignal, SystemAmbient};
use super::store::{FileStore, PreferenceStore};

/// What the environment offers for resolving and persisting the theme.
///
/// Build it once, when the resolver is created. The resolution logic then
/// matches on the variant instead of checking the environment again.
pub enum ResolutionContext {
    /// Persistence and the ambient signal are both available.
    Full {
        store: Box<dyn PreferenceStore>,
        ambient: Box<dyn AmbientSignal>,
    },
    /// Persistence is unavailable. Resolution follows the ambient signal and
    /// choices last only for the current session.
    AmbientOnly { ambient: Box<dyn AmbientSignal> },
    /// A store without an ambient signal. A persisted choice is honored and
    /// changes are persisted; with nothing stored the mode is light.
    StoreOnly { store: Box<dyn PreferenceStore> },
    /// Non-interactive rendering: no persistence and no ambient signal.
    /// Always light.
    Degraded,
}

impl ResolutionContext {
    pub fn full(store: impl PreferenceStore + 'static, ambient: impl AmbientSignal + 'static) -> Self {
        ResolutionContext::Full {
            store: Box::new(store),
            ambient: Box::new(ambient),
        }
    }

    pub fn ambient_only(ambient: impl AmbientSignal + 'static) -> Self {
        ResolutionContext::AmbientOnly {
            ambient: Box::new(ambient),
        }
    }

    pub fn store_only(store: impl PreferenceStore + 'static) -> Self {
        ResolutionContext::StoreOnly {
            store: Box::new(store),
        }
    }

    pub fn degraded() -> Self {
        ResolutionContext::Degraded
    }

    /// Classifies whichever capabilities the host could provide.
    ///
    /// A supplied store is always kept. Only when neither capability is
    /// present is the result [`Degraded`](ResolutionContext::Degraded).
    pub fn probe(
        store: Option<Box<dyn PreferenceStore>>,
        ambient: Option<Box<dyn AmbientSignal>>,
    ) -> Self {
        match (store, ambient) {
            (Some(store), Some(ambient)) => ResolutionContext::Full { store, ambient },
            (None, Some(ambient)) => ResolutionContext::AmbientOnly { ambient },
            (Some(store), None) => ResolutionContext::StoreOnly { store },
            (None, None) => ResolutionContext::Degraded,
        }
    }

    /// Probes the host: the file store at `store_path` and the OS color scheme.
    ///
    /// A store that cannot be opened, or a missing location, falls back to
    /// [`AmbientOnly`](ResolutionContext::AmbientOnly) with a warning. A
    /// non-interactive host gets [`Degraded`](ResolutionContext::Degraded).
    pub fn detect(store_path: Option<&Path>, interactive: bool) -> Self {
        if !interactive {
            return Self::probe(None, None);
        }

        let store: Option<Box<dyn PreferenceStore>> = match store_path {
            Some(path) => match FileStore::open(path) {
                Ok(store) => Some(Box::new(store)),
                Err(e) => {
                    warn!("preference store unavailable, using the system theme only: {}", e);
                    None
                }
            },
            None => {
                warn!("no location for the preference store, using the system theme only");
                None
            }
        };
        Self::probe(store, Some(Box::new(SystemAmbient)))
    }

    /// Short name of the variant, used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionContext::Full { .. } => "full",
            ResolutionContext::AmbientOnly { .. } => "ambient-only",
            ResolutionContext::StoreOnly { .. } => "store-only",
            ResolutionContext::Degraded => "degraded",
        }
    }

    pub fn can_persist(&self) -> bool {
        matches!(
            self,
            ResolutionContext::Full { .. } | ResolutionContext::StoreOnly { .. }
        )
    }

    pub(crate) fn store(&self) -> Option<&dyn PreferenceStore> {
        match self {
            ResolutionContext::Full { store, .. } | ResolutionContext::StoreOnly { store } => {
                Some(store.as_ref())
            }
            _ => None,
        }
    }

    pub(crate) fn store_mut(&mut self) -> Option<&mut (dyn PreferenceStore + 'static)> {
        match self {
            ResolutionContext::Full { store, .. } | ResolutionContext::StoreOnly { store } => {
                Some(store.as_mut())
            }
            _ => None,
        }
    }

    pub(crate) fn ambient(&self) -> Option<&dyn AmbientSignal> {
        match self {
            ResolutionContext::Full { ambient, .. } | ResolutionContext::AmbientOnly { ambient } => {
                Some(ambient.as_ref())
            }
            ResolutionContext::StoreOnly { .. } | ResolutionContext::Degraded => None,
        }
    }
}

impl std::fmt::Debug for ResolutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResolutionContext").field(&self.kind()).finish()
    }
}
