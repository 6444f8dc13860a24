//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session store so the
//! guards only ever depend on authentication data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the header chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether dark mode is active.
    pub dark_mode: bool,
    /// Whether the collapsed nav menu is open (small screens).
    pub nav_open: bool,
}
