//! The read-only "prefers dark" signal from the surrounding system.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

use super::mode::ColorMode;

/// A system-level signal telling whether the user prefers a dark color scheme.
///
/// The resolver only reads this signal, and only when no preference has been
/// persisted yet.
pub trait AmbientSignal {
    fn prefers_dark(&self) -> bool;
}

/// Ambient signal backed by the process-wide theme detector.
///
/// By default the detector asks the OS for its color scheme. Use
/// [`set_theme_detector`] to force a mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAmbient;

impl AmbientSignal for SystemAmbient {
    fn prefers_dark(&self) -> bool {
        detect_color_mode().is_dark()
    }
}

/// Ambient signal with a constant answer.
///
/// # Example
///
/// ```rust
/// use modern_gui::{AmbientSignal, FixedAmbient};
///
/// assert!(FixedAmbient(true).prefers_dark());
/// assert!(!FixedAmbient(false).prefers_dark());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAmbient(pub bool);

impl AmbientSignal for FixedAmbient {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector [`SystemAmbient`] consults.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    ColorMode::from_dark(matches!(detect_os_theme(), OsThemeMode::Dark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_system_ambient_uses_detector() {
        set_theme_detector(|| ColorMode::Dark);
        assert!(SystemAmbient.prefers_dark());

        set_theme_detector(|| ColorMode::Light);
        assert!(!SystemAmbient.prefers_dark());

        reset_theme_detector();
    }

    #[test]
    fn test_fixed_ambient() {
        assert!(FixedAmbient(true).prefers_dark());
        assert!(!FixedAmbient(false).prefers_dark());
    }
}
