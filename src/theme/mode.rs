//! The two color modes and their persisted literal names.

use serde::{Deserialize, Serialize};

/// The active color mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Builds a mode from a boolean "is dark" flag.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Interprets a persisted value.
    ///
    /// Only the exact literal `"dark"` selects dark mode; every other value,
    /// including unknown or differently-cased strings, reads as light.
    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == "dark")
    }

    /// The literal written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a mode name that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode '{0}', expected 'light' or 'dark'")]
pub struct ParseColorModeError(pub String);

impl std::str::FromStr for ColorMode {
    type Err = ParseColorModeError;

    /// Strict parsing for user input. Stored values go through
    /// [`ColorMode::from_stored`] instead, which never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}
