use super::*;

// =============================================================
// Resolution priority
// =============================================================

#[test]
fn no_stored_preference_follows_os_signal() {
    assert_eq!(ThemeModel::resolve(None, true).applied(), Theme::Dark);
    assert_eq!(ThemeModel::resolve(None, false).applied(), Theme::Light);
}

#[test]
fn os_derived_resolution_is_not_explicit() {
    assert!(!ThemeModel::resolve(None, true).is_explicit());
    assert!(!ThemeModel::resolve(None, false).is_explicit());
}

#[test]
fn stored_preference_wins_over_os_signal() {
    let model = ThemeModel::resolve(Some(Theme::Light), true);
    assert_eq!(model.applied(), Theme::Light);
    assert!(model.is_explicit());

    let model = ThemeModel::resolve(Some(Theme::Dark), false);
    assert_eq!(model.applied(), Theme::Dark);
    assert!(model.is_explicit());
}

// =============================================================
// Explicit choice stickiness
// =============================================================

#[test]
fn toggle_flips_and_becomes_explicit() {
    let mut model = ThemeModel::resolve(None, false);
    assert_eq!(model.toggle(), Theme::Dark);
    assert_eq!(model.applied(), Theme::Dark);
    assert!(model.is_explicit());
}

#[test]
fn os_change_applies_while_preference_is_implicit() {
    let mut model = ThemeModel::resolve(None, false);
    assert_eq!(model.system_changed(true), Some(Theme::Dark));
    assert_eq!(model.applied(), Theme::Dark);
    assert_eq!(model.system_changed(false), Some(Theme::Light));
}

#[test]
fn os_change_is_ignored_after_explicit_toggle() {
    let mut model = ThemeModel::resolve(None, false);
    model.toggle();
    assert_eq!(model.system_changed(false), None);
    assert_eq!(model.system_changed(true), None);
    assert_eq!(model.applied(), Theme::Dark);
}

#[test]
fn os_change_is_ignored_with_stored_preference() {
    let mut model = ThemeModel::resolve(Some(Theme::Light), true);
    assert_eq!(model.system_changed(true), None);
    assert_eq!(model.applied(), Theme::Light);
}

#[test]
fn setting_the_same_theme_twice_is_idempotent() {
    let mut model = ThemeModel::resolve(None, true);
    model.set(Theme::Dark);
    model.set(Theme::Dark);
    assert_eq!(model.applied(), Theme::Dark);
    assert!(model.is_explicit());
}

// =============================================================
// Theme value helpers
// =============================================================

#[test]
fn parse_round_trips_both_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("auto"), None);
}

#[test]
fn toggle_ui_describes_the_next_state() {
    assert_eq!(Theme::Dark.icon_class(), "bi bi-sun-fill");
    assert_eq!(Theme::Light.icon_class(), "bi bi-moon-fill");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}
