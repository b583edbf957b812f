//! # Modern GUI - landing page with a persisted light/dark theme
//!
//! `modern-gui` renders a static marketing landing page (navigation bar with a
//! theme toggle, hero banner and feature grid) and owns the one piece of real
//! logic behind it: deciding, applying and remembering the color theme.
//!
//! ## Theme resolution
//!
//! A [`ThemeResolver`] picks the initial mode in priority order:
//!
//! 1. A value persisted under the storage key (`"dark"` means dark, anything
//!    else light)
//! 2. The system "prefers dark" signal, when nothing is persisted
//! 3. Light, when the context has neither (non-interactive rendering)
//!
//! Applying a mode marks the root element with the `dark` class and persists
//! the literal `"dark"` or `"light"`. Storage failures never surface; the
//! choice then simply lasts for the current session only.
//!
//! ```rust
//! use modern_gui::{ColorMode, FixedAmbient, MemoryStore, ResolutionContext, ThemeResolver};
//!
//! let store = MemoryStore::new();
//!
//! // First visit: nothing stored, the system prefers dark.
//! let mut resolver = ThemeResolver::new(ResolutionContext::full(store.clone(), FixedAmbient(true)));
//! assert_eq!(resolver.current(), ColorMode::Dark);
//! assert!(resolver.root().has_class("dark"));
//!
//! resolver.toggle();
//!
//! // Next visit: the stored choice wins over the system signal.
//! let resolver = ThemeResolver::new(ResolutionContext::full(store, FixedAmbient(true)));
//! assert_eq!(resolver.current(), ColorMode::Light);
//! ```
//!
//! ## Rendering
//!
//! [`PageRenderer`] renders a [`LandingPage`] to HTML with MiniJinja, reading
//! the root classes and toggle label from the resolver.
//!
//! ## Configuration
//!
//! [`Config`] loads the storage key, store location and page content from TOML.

pub mod config;
pub mod error;
pub mod render;
pub mod theme;

pub use config::{Config, PreferenceConfig};
pub use error::{Error, Result};
pub use render::{Feature, Hero, LandingPage, NavLink, PageRenderer, ToggleView};
pub use theme::{
    reset_theme_detector, set_theme_detector, AmbientSignal, ColorMode, FileStore, FixedAmbient,
    MemoryStore, ParseColorModeError, PreferenceStore, ResolutionContext, ResolutionSource,
    RootElement, StoreError, SubscriptionId, SystemAmbient, ThemeResolver, DARK_MARKER,
    DEFAULT_STORAGE_KEY,
};
