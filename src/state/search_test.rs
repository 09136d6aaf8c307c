use super::*;

const ITEM: &str = "Daycare Invoice #42";

#[test]
fn substring_match_is_case_insensitive() {
    assert!(matches(ITEM, "invoice"));
    assert!(matches(ITEM, &normalize("INVOICE")));
    assert!(matches(ITEM, "daycare inv"));
    assert!(matches(ITEM, "#42"));
}

#[test]
fn query_must_be_contiguous_substring() {
    assert!(!matches(ITEM, "zzz"));
    assert!(!matches(ITEM, "invoice 42"));
    assert!(!matches(ITEM, "daycare#42"));
}

#[test]
fn empty_query_matches_everything() {
    assert!(matches(ITEM, ""));
    assert!(matches("", ""));
}

#[test]
fn empty_text_matches_nothing_but_empty_query() {
    assert!(!matches("", "a"));
}

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize("INVOICE #42"), "invoice #42");
    assert_eq!(normalize("invoice"), "invoice");
}
