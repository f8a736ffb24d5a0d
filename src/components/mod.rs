//! Leptos components.

pub mod theme_toggle;
