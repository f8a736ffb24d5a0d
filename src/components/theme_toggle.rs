//! Dark theme checkbox for pages rendered with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-rendered pages that already carry the checkbox use `start()` from
//! the crate root instead. This component renders the checkbox itself and
//! drives the same controller through `util::dark_mode`.

use leptos::prelude::*;

use crate::theme::ToggleConfig;
use crate::util::dark_mode;

/// Checkbox that switches the `dark` class on `<body>` and remembers the
/// choice in `localStorage`.
#[component]
pub fn ThemeToggle(#[prop(optional)] config: Option<ToggleConfig>) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let checked = RwSignal::new(false);
    let id = config.with_value(|c| c.checkbox_id.clone());
    let label_for = id.clone();

    // Client only: the stored preference is unknown during SSR.
    Effect::new(move || match config.with_value(dark_mode::init) {
        Ok(mode) => checked.set(mode.is_dark()),
        Err(e) => leptos::logging::warn!("dark mode init failed: {e}"),
    });

    let on_change = move |ev| {
        let next = event_target_checked(&ev);
        match config.with_value(|c| dark_mode::change(c, next)) {
            Ok(mode) => checked.set(mode.is_dark()),
            Err(e) => {
                leptos::logging::warn!("dark mode change failed: {e}");
                // Storage rejected the write, so put the box back.
                checked.set(!next);
            }
        }
    };

    view! {
        <label class="theme-toggle" for=label_for>
            <input
                type="checkbox"
                id=id
                class="theme-toggle__input"
                prop:checked=move || checked.get()
                on:change=on_change
            />
            <span class="theme-toggle__label">"Dark theme"</span>
        </label>
    }
}
