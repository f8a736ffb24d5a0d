//! Persisted theme preference and the visible state it maps to.
//!
//! DESIGN
//! ======
//! The stored value is a plain string (`"on"` / `"off"`). Reading is lenient
//! (anything but `"on"` is light); `FromStr` is strict.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// User's dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark theme.
    On,
    /// Light theme. Also what a first visit sees.
    #[default]
    Off,
}

impl ThemeMode {
    /// Storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Interpret a raw stored value. Only an exact `"on"` selects dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("on") => Self::On,
            _ => Self::Off,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for ThemeMode {
    fn from(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ThemeError::InvalidMode(other.to_owned())),
        }
    }
}

/// What the user sees: checkbox state and marker class presence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub control_checked: bool,
    pub class_present: bool,
}

/// Map a preference to the visible state it requires.
///
/// Initialization and the change handler both go through this, so the
/// control and the marker class can never disagree with the stored mode.
pub const fn apply_preference(mode: ThemeMode) -> ThemeState {
    let dark = mode.is_dark();
    ThemeState { control_checked: dark, class_present: dark }
}
