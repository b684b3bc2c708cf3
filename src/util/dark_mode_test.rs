use super::*;

#[test]
fn toggle_flips_the_current_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn double_toggle_restores_the_original_value() {
    assert!(!toggle(toggle(false)));
}

#[test]
fn preference_defaults_to_light_off_browser() {
    assert!(!read_preference());
}
