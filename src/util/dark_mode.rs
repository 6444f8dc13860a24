//! Dark mode preference handling.
//!
//! Reads the stored preference (falling back to the system color scheme) and
//! applies a `data-theme` attribute to the `<html>` element. Toggling writes
//! the choice back to `localStorage`. Requires a browser environment.

use crate::util::persist;

const STORAGE_KEY: &str = "quill_dark";

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    if let Some(stored) = persist::load_json::<bool>(STORAGE_KEY) {
        return stored;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the choice, and apply the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    persist::save_json(STORAGE_KEY, &next);
    apply(next);
    next
}
