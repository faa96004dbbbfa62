//! Site chrome state: dark mode and the mobile navigation menu.
//!
//! Everything else on the site is view-local (active tabs, filters,
//! expanded panels live in their feature components); only concerns the
//! header and multiple pages both touch end up here.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared chrome state provided as `RwSignal<UiState>` at the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    /// Close the mobile menu, e.g. after navigation.
    #[must_use]
    pub fn with_menu_closed(mut self) -> Self {
        self.menu_open = false;
        self
    }
}
