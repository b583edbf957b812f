//! Theme preference resolution, application and persistence.

use log::{debug, info, warn};

use super::context::ResolutionContext;
use super::mode::ColorMode;
use super::root::{RootElement, DARK_MARKER};

/// Storage key the preference is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Where the initial mode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A previously persisted choice.
    Stored,
    /// The system "prefers dark" signal, because nothing was persisted.
    Ambient,
    /// Neither persistence nor an ambient signal was available.
    Default,
}

impl ResolutionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionSource::Stored => "stored",
            ResolutionSource::Ambient => "ambient",
            ResolutionSource::Default => "default",
        }
    }
}

/// Handle returned by [`ThemeResolver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ColorMode)>;

/// Owns the active color mode for one page session.
///
/// Construction resolves the initial mode and applies it immediately: the
/// root marker is set and the value is persisted. From then on
/// [`toggle`](Self::toggle) and [`apply`](Self::apply) keep marker, store and
/// mode consistent, and notify subscribers whenever the mode changes.
///
/// # Example
///
/// ```rust
/// use modern_gui::{ColorMode, FixedAmbient, MemoryStore, PreferenceStore, ResolutionContext, ThemeResolver};
///
/// let store = MemoryStore::new();
/// let mut resolver = ThemeResolver::new(ResolutionContext::full(store.clone(), FixedAmbient(false)));
/// assert_eq!(resolver.current(), ColorMode::Light);
///
/// assert_eq!(resolver.toggle(), ColorMode::Dark);
/// assert_eq!(store.get("theme").as_deref(), Some("dark"));
/// ```
pub struct ThemeResolver {
    context: ResolutionContext,
    key: String,
    mode: ColorMode,
    source: ResolutionSource,
    root: RootElement,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeResolver {
    /// Creates a resolver persisting under [`DEFAULT_STORAGE_KEY`].
    pub fn new(context: ResolutionContext) -> Self {
        Self::with_key(context, DEFAULT_STORAGE_KEY)
    }

    /// Creates a resolver persisting under a custom key.
    pub fn with_key(context: ResolutionContext, key: impl Into<String>) -> Self {
        let key = key.into();
        let (mode, source) = Self::resolve(&context, &key);
        debug!(
            "resolved initial theme '{}' from {} ({} context)",
            mode,
            source.as_str(),
            context.kind()
        );

        let mut resolver = Self {
            context,
            key,
            mode,
            source,
            root: RootElement::new(),
            listeners: Vec::new(),
            next_id: 0,
        };
        resolver.apply(mode);
        resolver
    }

    /// Computes the initial mode without applying it.
    ///
    /// A persisted value wins, then the ambient signal, then light.
    pub fn resolve_initial(context: &ResolutionContext, key: &str) -> ColorMode {
        Self::resolve(context, key).0
    }

    fn resolve(context: &ResolutionContext, key: &str) -> (ColorMode, ResolutionSource) {
        if let Some(stored) = context.store().and_then(|s| s.get(key)) {
            return (ColorMode::from_stored(&stored), ResolutionSource::Stored);
        }
        match context.ambient() {
            Some(ambient) => (
                ColorMode::from_dark(ambient.prefers_dark()),
                ResolutionSource::Ambient,
            ),
            None => (ColorMode::Light, ResolutionSource::Default),
        }
    }

    /// Marks the root element and persists `mode`.
    ///
    /// Both side effects finish before subscribers are notified. Listeners
    /// run only if the mode actually changed. A failed write is logged and
    /// otherwise ignored; the choice then lasts only for this session.
    pub fn apply(&mut self, mode: ColorMode) {
        if mode.is_dark() {
            self.root.add_class(DARK_MARKER);
        } else {
            self.root.remove_class(DARK_MARKER);
        }

        if let Some(store) = self.context.store_mut() {
            if let Err(e) = store.set(&self.key, mode.as_str()) {
                warn!("could not persist theme '{}': {}", mode, e);
            }
        }

        let previous = std::mem::replace(&mut self.mode, mode);
        if previous != mode {
            info!("theme changed from '{}' to '{}'", previous, mode);
            for (_, listener) in &mut self.listeners {
                listener(mode);
            }
        }
    }

    /// Flips the mode, applies it, and returns the new mode.
    pub fn toggle(&mut self) -> ColorMode {
        let next = self.mode.toggled();
        self.apply(next);
        next
    }

    pub fn current(&self) -> ColorMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Where the initial mode came from.
    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    pub fn root(&self) -> &RootElement {
        &self.root
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Registers a listener called with the new mode after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(ColorMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("context", &self.context)
            .field("key", &self.key)
            .field("mode", &self.mode)
            .field("source", &self.source)
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
