#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Normalize a raw input value into a query.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Case-insensitive substring match. An empty query matches everything —
/// clearing the search box shows the full list again.
#[must_use]
pub fn matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}
