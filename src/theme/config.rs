//! Names the toggle binds to and how initialization treats the light state.
//!
//! Defaults match the page markup: `#dark_theme_checkbox`, storage key
//! `dark_mode`, marker class `dark` on `<body>`. A host page may pass a JSON
//! object to override any of them.

use serde::Deserialize;

use super::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "dark_mode";
pub const DEFAULT_CHECKBOX_ID: &str = "dark_theme_checkbox";
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// What initialization does when the stored preference is not `on`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitPolicy {
    /// Uncheck the control and remove the marker class.
    #[default]
    AssertLight,
    /// Leave whatever the server-rendered markup has.
    KeepMarkup,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub storage_key: String,
    pub checkbox_id: String,
    pub dark_class: String,
    pub init_policy: InitPolicy,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            checkbox_id: DEFAULT_CHECKBOX_ID.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            init_policy: InitPolicy::AssertLight,
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON override. Missing fields keep their defaults; blank
    /// names are rejected since they cannot address storage or the DOM.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in [
            ("storage_key", &self.storage_key),
            ("checkbox_id", &self.checkbox_id),
            ("dark_class", &self.dark_class),
        ] {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidConfig("dark_class must be a single class name".to_owned()));
        }
        Ok(())
    }
}
