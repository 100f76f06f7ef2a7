//! websets — search and enrichment API over sample engineer and company data.
//!
//! This crate re-exports the two workspace layers so that integration tests
//! and benchmarks can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! main ──► Config ──► AppState ──► axum Router ──► websets-core
//!                        │                          (search, enrich)
//!                        └── DataProvider + EntropySource
//! ```
//!
//! The dataset is built once at startup and never mutated; enrichment output
//! is returned to the caller and not written back.

pub use websets_api as api;

pub use websets_core::{
    config, dataset, enrich, search, types, CompanyRecord, ConstantEntropy, DataProvider,
    EngineerRecord, EnrichRequest, EnrichedRecord, Enrichment, EnrichmentKind, EntropySource,
    Record, RecordKind, SampleDataset, SearchRequest, SearchResults, StaticDataset,
    ThreadEntropy, WebsetsError,
};
