//! Search layer: case-insensitive substring filter plus offset/limit paging.
//!
//! A record matches when the lower-cased query is a substring of any of its
//! [`searchable_fields`](crate::types::Record::searchable_fields). Matching is
//! a stable filter: results keep dataset order and are never ranked.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::dataset::DataProvider;
use crate::types::{Record, RecordKind};

/// Parameters of a single search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// `None` when the caller named a kind that matches neither dataset; such
    /// a search yields an empty page rather than an error.
    pub kind: Option<RecordKind>,
    pub limit: usize,
    pub offset: usize,
}

impl SearchRequest {
    /// A first page of the default size; see [`SearchConfig::default_limit`].
    pub fn new(query: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            query: query.into(),
            kind: Some(kind),
            limit: SearchConfig::default().default_limit,
            offset: 0,
        }
    }

    /// Build a request from a raw kind string, accepting either spelling.
    pub fn for_kind_str(query: impl Into<String>, kind: &str) -> Self {
        Self {
            query: query.into(),
            kind: kind.parse().ok(),
            limit: SearchConfig::default().default_limit,
            offset: 0,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// One page of matches plus the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub results: Vec<Record>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Whether `record` matches an already lower-cased `needle`.
pub fn matches(record: &Record, needle: &str, empty_matches_all: bool) -> bool {
    if needle.is_empty() {
        return empty_matches_all;
    }
    record
        .searchable_fields()
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter the dataset for `request.kind` and return the requested page.
pub fn search(
    provider: &dyn DataProvider,
    request: &SearchRequest,
    options: &SearchConfig,
) -> SearchResults {
    let needle = request.query.to_lowercase();

    let candidates: &[Record] = match request.kind {
        Some(kind) => provider.list(kind),
        None => &[],
    };

    let matched: Vec<&Record> = candidates
        .iter()
        .filter(|r| matches(r, &needle, options.empty_query_matches_all))
        .collect();
    let total = matched.len();

    let results: Vec<Record> = matched
        .into_iter()
        .skip(request.offset)
        .take(request.limit)
        .cloned()
        .collect();

    tracing::debug!(
        query = %request.query,
        kind = ?request.kind,
        total,
        returned = results.len(),
        "search complete"
    );

    SearchResults {
        results,
        total,
        limit: request.limit,
        offset: request.offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SampleDataset;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn names(page: &SearchResults) -> Vec<&str> {
        page.results.iter().map(Record::name).collect()
    }

    #[test]
    fn empty_query_matches_every_engineer() {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new("", RecordKind::Engineer),
            &SearchConfig::default(),
        );
        assert_eq!(page.total, 5);
        assert_eq!(page.results.len(), 5);
    }

    #[test]
    fn empty_query_matches_nothing_when_configured() {
        let options = SearchConfig {
            empty_query_matches_all: false,
            ..SearchConfig::default()
        };
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new("", RecordKind::Company),
            &options,
        );
        assert_eq!(page.total, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn company_field_is_searched_case_insensitively() {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new("ANTHROPIC", RecordKind::Engineer),
            &SearchConfig::default(),
        );
        assert_eq!(names(&page), vec!["Michael Zhang"]);
    }

    #[rstest]
    #[case("full-stack", vec!["Michael Zhang", "Thomas Park"])]
    #[case("typescript", vec!["Sarah Johnson"])]
    #[case("python", vec!["Michael Zhang", "Thomas Park", "Elena Rodriguez", "Alex Rivera"])]
    #[case("san francisco", vec![])]
    fn engineer_matches_preserve_dataset_order(#[case] query: &str, #[case] expected: Vec<&str>) {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new(query, RecordKind::Engineer),
            &SearchConfig::default(),
        );
        assert_eq!(names(&page), expected);
    }

    #[rstest]
    #[case("consumer", vec!["Pointwise", "Shortbread"])]
    #[case("ai ", vec!["Fairway Health", "SPRX"])]
    #[case("w23", vec![])]
    fn company_matches(#[case] query: &str, #[case] expected: Vec<&str>) {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new(query, RecordKind::Company),
            &SearchConfig::default(),
        );
        assert_eq!(names(&page), expected);
    }

    #[test]
    fn unknown_kind_yields_empty_page() {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::for_kind_str("", "robots"),
            &SearchConfig::default(),
        );
        assert_eq!(page.total, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn page_is_sliced_after_counting() {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new("", RecordKind::Engineer).offset(1).limit(2),
            &SearchConfig::default(),
        );
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 1);
        assert_eq!(names(&page), vec!["Sarah Johnson", "Thomas Park"]);
    }

    #[test]
    fn offset_past_end_is_empty_not_error() {
        let page = search(
            &SampleDataset::new(),
            &SearchRequest::new("", RecordKind::Company).offset(50),
            &SearchConfig::default(),
        );
        assert_eq!(page.total, 5);
        assert!(page.results.is_empty());
    }

    #[test]
    fn new_request_uses_configured_default_page() {
        let request = SearchRequest::new("rust", RecordKind::Engineer);
        assert_eq!(request.limit, SearchConfig::default().default_limit);
        assert_eq!(request.limit, crate::config::Config::defaults().search.default_limit);
        assert_eq!(request.offset, 0);
    }
}
