//! Theme preference resolution and persistence.
//!
//! This module provides:
//!
//! - [`ColorMode`]: Light or dark color mode enum
//! - [`ThemeResolver`]: Resolves the initial mode, applies and persists changes
//! - [`PreferenceStore`]: Storage interface, with [`MemoryStore`] and [`FileStore`]
//! - [`AmbientSignal`]: The system "prefers dark" signal, with OS detection
//! - [`ResolutionContext`]: Capabilities probed once at resolver construction
//! - [`RootElement`]: The root presentation element carrying the `dark` marker
//!
//! Resolution order is: persisted choice, then ambient signal, then light.

mod ambient;
mod context;
mod mode;
mod resolver;
mod root;
mod store;

pub use ambient::{reset_theme_detector, set_theme_detector, AmbientSignal, FixedAmbient, SystemAmbient};
pub use context::ResolutionContext;
pub use mode::{ColorMode, ParseColorModeError};
pub use resolver::{ResolutionSource, SubscriptionId, ThemeResolver, DEFAULT_STORAGE_KEY};
pub use root::{RootElement, DARK_MARKER};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
