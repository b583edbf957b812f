//! Integration tests for theme resolution across sessions.
//!
//! Each `ThemeResolver::new` call stands for a fresh page load; stores are
//! shared between loads the way a browser profile's storage is.

use modern_gui::{
    ColorMode, FixedAmbient, MemoryStore, PreferenceStore, ResolutionContext, ResolutionSource,
    ThemeResolver, DARK_MARKER,
};
use proptest::prelude::*;

fn load(store: &MemoryStore, prefers_dark: bool) -> ThemeResolver {
    ThemeResolver::new(ResolutionContext::full(store.clone(), FixedAmbient(prefers_dark)))
}

#[test]
fn test_first_load_ambient_dark() {
    let store = MemoryStore::new();
    let resolver = load(&store, true);

    assert!(resolver.is_dark());
    assert!(resolver.root().has_class(DARK_MARKER));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_first_load_ambient_light() {
    let store = MemoryStore::new();
    let resolver = load(&store, false);

    assert!(!resolver.is_dark());
    assert!(!resolver.root().has_class(DARK_MARKER));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_stored_light_wins_over_ambient_dark() {
    let store = MemoryStore::with_entry("theme", "light");
    let resolver = load(&store, true);

    assert_eq!(resolver.current(), ColorMode::Light);
    assert!(!resolver.root().has_class(DARK_MARKER));
}

#[test]
fn test_apply_dark_is_idempotent() {
    let store = MemoryStore::new();
    let mut resolver = load(&store, false);

    resolver.apply(ColorMode::Dark);
    let once = (resolver.root().clone(), store.get("theme"));
    resolver.apply(ColorMode::Dark);
    let twice = (resolver.root().clone(), store.get("theme"));

    assert_eq!(once, twice);
    assert_eq!(resolver.root().classes(), &[DARK_MARKER.to_string()]);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_toggle_round_trip() {
    let store = MemoryStore::new();
    let mut resolver = load(&store, false);
    assert!(!resolver.is_dark());

    assert_eq!(resolver.toggle(), ColorMode::Dark);
    assert!(resolver.is_dark());
    assert_eq!(store.get("theme").as_deref(), Some("dark"));

    assert_eq!(resolver.toggle(), ColorMode::Light);
    assert!(!resolver.is_dark());
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_reload_after_toggle_keeps_choice() {
    for prefers_dark in [false, true] {
        let store = MemoryStore::new();
        let mut first = load(&store, false);
        first.toggle();
        drop(first);

        let reloaded = load(&store, prefers_dark);
        assert!(reloaded.is_dark(), "ambient = {}", prefers_dark);
    }
}

#[test]
fn test_disabled_store_lasts_one_session() {
    let store = MemoryStore::disabled();
    let mut first = ThemeResolver::new(ResolutionContext::full(store.clone(), FixedAmbient(false)));
    first.toggle();
    assert!(first.is_dark());

    let reloaded = ThemeResolver::new(ResolutionContext::full(store, FixedAmbient(false)));
    assert!(!reloaded.is_dark());
}

#[test]
fn test_store_without_ambient_uses_stored_value() {
    let store = MemoryStore::with_entry("theme", "dark");
    let mut resolver =
        ThemeResolver::new(ResolutionContext::probe(Some(Box::new(store.clone())), None));

    assert_eq!(resolver.current(), ColorMode::Dark);
    assert_eq!(resolver.source(), ResolutionSource::Stored);
    assert!(resolver.root().has_class(DARK_MARKER));

    assert_eq!(resolver.toggle(), ColorMode::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_store_without_ambient_and_nothing_stored_is_light() {
    let store = MemoryStore::new();
    let resolver = ThemeResolver::new(ResolutionContext::store_only(store.clone()));

    assert_eq!(resolver.current(), ColorMode::Light);
    assert_eq!(resolver.source(), ResolutionSource::Default);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

proptest! {
    #[test]
    fn prop_marker_and_store_track_toggle_parity(
        toggles in 0usize..16,
        prefers_dark: bool,
    ) {
        let store = MemoryStore::new();
        let mut resolver = load(&store, prefers_dark);
        for _ in 0..toggles {
            resolver.toggle();
        }

        let expected = ColorMode::from_dark(prefers_dark ^ (toggles % 2 == 1));
        prop_assert_eq!(resolver.current(), expected);
        prop_assert_eq!(resolver.root().has_class(DARK_MARKER), expected.is_dark());
        prop_assert_eq!(store.get("theme"), Some(expected.as_str().to_string()));

        let reloaded = load(&store, !prefers_dark);
        prop_assert_eq!(reloaded.current(), expected);
    }
}
