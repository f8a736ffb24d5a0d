//! Dark theme toggle: apply the stored preference on load, persist and
//! apply every change of the control.
//!
//! DESIGN
//! ======
//! The controller owns its store and surface so the browser binding can move
//! it into the `change` listener closure. Both lifecycle paths funnel through
//! [`apply_preference`], so the checkbox, the marker class and the stored
//! value agree after every call that returns `Ok`.
//!
//! Writes go to the store before the surface. If the store rejects the write
//! the page keeps its previous look and the error is returned. If the surface
//! rejects the new mode, the previously stored mode is written back to both.

use super::config::{InitPolicy, ToggleConfig};
use super::error::ThemeError;
use super::mode::{ThemeMode, ThemeState, apply_preference};
use super::store::{PreferenceStore, ThemeSurface};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    config: ToggleConfig,
    mode: ThemeMode,
}

impl<S, V> ThemeController<S, V>
where
    S: PreferenceStore,
    V: ThemeSurface,
{
    pub fn new(store: S, surface: V, config: ToggleConfig) -> Self {
        Self { store, surface, config, mode: ThemeMode::Off }
    }

    /// Page-load path. Reads the stored preference and renders it.
    ///
    /// With [`InitPolicy::KeepMarkup`] a non-`on` preference leaves the
    /// surface as the markup delivered it.
    pub fn initialize(&mut self) -> Result<ThemeMode, ThemeError> {
        let raw = self.store.load(&self.config.storage_key)?;
        let mode = ThemeMode::from_stored(raw.as_deref());
        if mode.is_dark() || self.config.init_policy == InitPolicy::AssertLight {
            self.render(mode)?;
        }
        self.mode = mode;
        Ok(mode)
    }

    /// Change-event path for a known checked state.
    pub fn on_change(&mut self, checked: bool) -> Result<ThemeMode, ThemeError> {
        let mode = ThemeMode::from(checked);
        let previous = ThemeMode::from_stored(self.store.load(&self.config.storage_key)?.as_deref());
        self.store.save(&self.config.storage_key, mode.as_str())?;
        if let Err(e) = self.render(mode) {
            // Put store and surface back on the previously stored mode.
            let _ = self.store.save(&self.config.storage_key, previous.as_str());
            let _ = self.render(previous);
            return Err(e);
        }
        self.mode = mode;
        Ok(mode)
    }

    /// Change-event path that reads the checked state off the control.
    pub fn on_control_changed(&mut self) -> Result<ThemeMode, ThemeError> {
        let checked = self.surface.is_checked()?;
        self.on_change(checked)
    }

    /// Last mode applied by this controller.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Visible state as the surface currently reports it.
    pub fn state(&self) -> Result<ThemeState, ThemeError> {
        Ok(ThemeState {
            control_checked: self.surface.is_checked()?,
            class_present: self.surface.has_marker(&self.config.dark_class)?,
        })
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn into_parts(self) -> (S, V) {
        (self.store, self.surface)
    }

    fn render(&mut self, mode: ThemeMode) -> Result<(), ThemeError> {
        let state = apply_preference(mode);
        self.surface.set_checked(state.control_checked)?;
        self.surface.set_marker(&self.config.dark_class, state.class_present)
    }
}
