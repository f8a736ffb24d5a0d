//! Dark mode bindings to `localStorage` and the live DOM.
//!
//! Reads the user's preference from `localStorage` and toggles the marker
//! class on `<body>` plus the checked state of the toggle checkbox. Requires
//! a browser environment; non-hydrate builds compile these as no-ops so the
//! component can still render on the server.
//!
//! TRADE-OFFS
//! ==========
//! Failures (storage disabled, checkbox missing) are returned rather than
//! thrown. Callers log them and leave the page in its current theme.

use crate::theme::{ThemeError, ThemeMode, ToggleConfig};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
pub use browser::{DomSurface, LocalStorageStore};

/// Bind to an existing checkbox in server-rendered markup.
///
/// Applies the stored preference, then keeps a `change` listener attached for
/// the lifetime of the page.
pub fn bind(config: ToggleConfig) -> Result<ThemeMode, ThemeError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        browser::bind(config)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(ThemeMode::Off)
    }
}

/// Read the stored preference and apply it to the checkbox and `<body>`.
pub fn init(config: &ToggleConfig) -> Result<ThemeMode, ThemeError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        browser::controller(config.clone())?.initialize()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(ThemeMode::Off)
    }
}

/// Persist `checked` and apply the matching theme.
pub fn change(config: &ToggleConfig, checked: bool) -> Result<ThemeMode, ThemeError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        browser::controller(config.clone())?.on_change(checked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(ThemeMode::from(checked))
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlElement, HtmlInputElement, Storage};

    use crate::theme::{PreferenceStore, ThemeController, ThemeError, ThemeMode, ThemeSurface, ToggleConfig};

    fn js_error(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    /// `window.localStorage`.
    pub struct LocalStorageStore {
        storage: Storage,
    }

    impl LocalStorageStore {
        pub fn open() -> Result<Self, ThemeError> {
            let storage = web_sys::window()
                .ok_or(ThemeError::StorageUnavailable)?
                .local_storage()
                .map_err(|_| ThemeError::StorageUnavailable)?
                .ok_or(ThemeError::StorageUnavailable)?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for LocalStorageStore {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
            self.storage
                .get_item(key)
                .map_err(|e| ThemeError::Storage(js_error(&e)))
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            self.storage
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage(js_error(&e)))
        }
    }

    /// The toggle checkbox and the document body.
    #[derive(Clone)]
    pub struct DomSurface {
        checkbox: HtmlInputElement,
        root: HtmlElement,
    }

    impl DomSurface {
        pub fn find(checkbox_id: &str) -> Result<Self, ThemeError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ThemeError::NoDocument)?;
            let root = document.body().ok_or(ThemeError::NoDocument)?;
            let checkbox = document
                .get_element_by_id(checkbox_id)
                .ok_or_else(|| ThemeError::ElementMissing(checkbox_id.to_owned()))?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| ThemeError::NotACheckbox(checkbox_id.to_owned()))?;
            Ok(Self { checkbox, root })
        }

        pub fn checkbox(&self) -> &HtmlInputElement {
            &self.checkbox
        }
    }

    impl ThemeSurface for DomSurface {
        fn is_checked(&self) -> Result<bool, ThemeError> {
            Ok(self.checkbox.checked())
        }

        fn set_checked(&mut self, checked: bool) -> Result<(), ThemeError> {
            self.checkbox.set_checked(checked);
            Ok(())
        }

        fn has_marker(&self, class: &str) -> Result<bool, ThemeError> {
            Ok(self.root.class_list().contains(class))
        }

        fn set_marker(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
            let list = self.root.class_list();
            let result = if present { list.add_1(class) } else { list.remove_1(class) };
            result.map_err(|e| ThemeError::ClassList(js_error(&e)))
        }
    }

    pub(super) fn controller(config: ToggleConfig) -> Result<ThemeController<LocalStorageStore, DomSurface>, ThemeError> {
        let store = LocalStorageStore::open()?;
        let surface = DomSurface::find(&config.checkbox_id)?;
        Ok(ThemeController::new(store, surface, config))
    }

    pub(super) fn bind(config: ToggleConfig) -> Result<ThemeMode, ThemeError> {
        let mut ctl = controller(config)?;
        let checkbox = ctl.surface().checkbox().clone();
        let mode = ctl.initialize()?;
        log::debug!("dark mode initialized: {mode}");

        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| match ctl.on_control_changed() {
            Ok(mode) => log::debug!("dark mode changed: {mode}"),
            Err(e) => log::warn!("dark mode change failed: {e}"),
        });
        checkbox
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Listener(js_error(&e)))?;
        // Listener lives as long as the page.
        on_change.forget();
        Ok(mode)
    }
}
