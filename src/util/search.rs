//! Case-insensitive substring filtering for table search boxes.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Whether any column value contains the search term, ignoring case.
/// An empty term matches every row.
pub fn matches_search(columns: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    columns
        .iter()
        .any(|column| column.to_lowercase().contains(&needle))
}
