//! Domain-specific assertion macros for websets harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* record broke *which* search or enrichment rule.

use websets::{Record, SearchResults};

// ---------------------------------------------------------------------------
// Search result assertions
// ---------------------------------------------------------------------------

/// Assert the page holds exactly these record names, in order.
///
/// ```rust
/// assert_names!(page, ["Michael Zhang"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($page:expr, [$($name:expr),* $(,)?]) => {{
        let page: &websets::SearchResults = &$page;
        let actual: Vec<&str> = page.results.iter().map(websets::Record::name).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "unexpected result names");
    }};
}

/// Assert every result on the page contains `query` in a searchable field.
#[macro_export]
macro_rules! assert_all_match {
    ($page:expr, $query:expr) => {{
        let page: &websets::SearchResults = &$page;
        let query: &str = $query;
        if let Some(bad) = $crate::common::assertions::first_non_match(page, query) {
            panic!(
                "assert_all_match! failed: {:?} does not contain {:?} in any searchable field",
                bad.name(),
                query
            );
        }
    }};
}

/// Assert `value` lies in the inclusive range `lo..=hi`.
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $lo:expr, $hi:expr) => {{
        let value = $value;
        let (lo, hi) = ($lo, $hi);
        if !(lo..=hi).contains(&value) {
            panic!(
                "assert_in_range! failed: {} = {} not in [{}, {}]",
                stringify!($value),
                value,
                lo,
                hi
            );
        }
    }};
}

/// The first record on the page that does not contain `query` (lower-cased)
/// in any searchable field. An empty query matches everything.
pub fn first_non_match<'a>(page: &'a SearchResults, query: &str) -> Option<&'a Record> {
    let needle = query.to_lowercase();
    page.results.iter().find(|r| {
        !r.searchable_fields()
            .into_iter()
            .flatten()
            .any(|f| f.to_lowercase().contains(&needle))
    })
}

/// Assert every record on the page is present, unchanged, in `universe`.
pub fn assert_subset_of(page: &SearchResults, universe: &[Record]) {
    for record in &page.results {
        assert!(
            universe.contains(record),
            "result {:?} (id {}) is not in the dataset",
            record.name(),
            record.id()
        );
    }
}
