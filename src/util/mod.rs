//! Browser glue shared by the entry points and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys calls out of `theme` so that module stays testable natively.

pub mod dark_mode;
