//! # theme-toggle
//!
//! Leptos + WASM dark theme switch. Applies the `dark` class on `<body>`
//! according to a preference remembered in `localStorage`, and flips it when
//! the user toggles the `#dark_theme_checkbox` control.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Preference type, config, errors, store/surface traits, controller |
//! | [`util`] | `localStorage` and DOM bindings (hydrate feature) |
//! | [`components`] | `<ThemeToggle/>` Leptos component |
//!
//! Pages that already render the checkbox call [`start`] (or
//! [`start_with_config`]) from their bootstrap script.

pub mod components;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
use crate::theme::ToggleConfig;

/// Bind to `#dark_theme_checkbox` with the default storage key and class.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start() {
    init_logging();
    run(ToggleConfig::default());
}

/// Bind using a JSON config object, e.g. `{"dark_class":"night"}`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start_with_config(config_json: &str) {
    init_logging();
    match ToggleConfig::from_json(config_json) {
        Ok(config) => run(config),
        Err(e) => log::warn!("dark mode disabled: {e}"),
    }
}

#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // Already set when both entry points run on one page.
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(feature = "hydrate")]
fn run(config: ToggleConfig) {
    log::info!("theme toggle loaded");
    if let Err(e) = util::dark_mode::bind(config) {
        log::warn!("dark mode disabled: {e}");
    }
}
