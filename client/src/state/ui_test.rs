use super::*;

#[test]
fn defaults_are_light_and_closed() {
    let ui = UiState::default();
    assert!(!ui.dark_mode);
    assert!(!ui.menu_open);
}

#[test]
fn with_menu_closed_preserves_theme() {
    let ui = UiState { dark_mode: true, menu_open: true };
    let closed = ui.with_menu_closed();
    assert!(closed.dark_mode);
    assert!(!closed.menu_open);
}
