//! Seams between the toggle logic and the host environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser these are backed by `localStorage` and the live DOM
//! (`util::dark_mode`). The in-memory versions here serve non-browser builds
//! and unit tests.

use std::collections::{BTreeSet, HashMap};

use super::error::ThemeError;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Origin-scoped string key/value storage.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The toggle control and the root container's class list.
pub trait ThemeSurface {
    fn is_checked(&self) -> Result<bool, ThemeError>;
    fn set_checked(&mut self, checked: bool) -> Result<(), ThemeError>;
    fn has_marker(&self, class: &str) -> Result<bool, ThemeError>;
    /// Add (`present = true`) or remove the marker class.
    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if set on an earlier visit.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_owned(), value.to_owned());
        Self { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.items.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    checked: bool,
    classes: BTreeSet<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose markup already carries `classes`.
    pub fn with_classes<'a>(checked: bool, classes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            checked,
            classes: classes.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl ThemeSurface for MemorySurface {
    fn is_checked(&self) -> Result<bool, ThemeError> {
        Ok(self.checked)
    }

    fn set_checked(&mut self, checked: bool) -> Result<(), ThemeError> {
        self.checked = checked;
        Ok(())
    }

    fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.classes.contains(class))
    }

    fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        if present {
            self.classes.insert(class.to_owned());
        } else {
            self.classes.remove(class);
        }
        Ok(())
    }
}
