//! Browser-independent theme toggle logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs without a DOM so it can be unit tested natively.
//! `util::dark_mode` plugs the browser implementations of the store and
//! surface traits into [`controller::ThemeController`].

pub mod config;
pub mod controller;
pub mod error;
pub mod mode;
pub mod store;

pub use config::{InitPolicy, ToggleConfig};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use mode::{ThemeMode, ThemeState, apply_preference};
pub use store::{MemoryStore, MemorySurface, PreferenceStore, ThemeSurface};
