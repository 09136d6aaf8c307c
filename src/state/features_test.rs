use super::*;

#[test]
fn known_keys_resolve() {
    let settings = lookup("settings").expect("settings in catalog");
    assert_eq!(settings.name, "User Settings");
    assert_eq!(settings.phase, "Phase 3");

    let reports = lookup("reports").expect("reports in catalog");
    assert_eq!(reports.name, "Advanced Reporting");
    assert_eq!(reports.phase, "Phase 4");
}

#[test]
fn live_pages_are_not_in_the_catalog() {
    assert_eq!(lookup("invoices"), None);
    assert_eq!(lookup("payments"), None);
    assert_eq!(lookup("children"), None);
}

#[test]
fn lookup_is_exact_not_fuzzy() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("Settings"), None);
    assert_eq!(lookup("settings "), None);
}

#[test]
fn catalog_keys_are_unique() {
    let features = all();
    for (i, a) in features.iter().enumerate() {
        for b in &features[i + 1..] {
            assert_ne!(a.key, b.key);
        }
    }
}

#[test]
fn every_entry_is_fully_described() {
    for feature in all() {
        assert!(!feature.key.is_empty());
        assert!(!feature.name.is_empty());
        assert!(!feature.description.is_empty());
        assert!(feature.phase.starts_with("Phase "));
    }
}
