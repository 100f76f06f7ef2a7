//! websets-core — datasets and the search/enrich pipeline.
//!
//! This crate holds everything the HTTP layer needs that is not HTTP: the
//! record types, the read-only dataset store, and the two query operations.
//!
//! # Architecture
//!
//! ```text
//! DataProvider ──► search ──► SearchResults
//!      │
//!      └─────────► enrich ──► EnrichedRecord
//!                    ▲
//!              EntropySource
//! ```
//!
//! Both operations are synchronous and pure over an immutable store, so a
//! single `Arc<dyn DataProvider>` can be shared by any number of requests.

pub mod config;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod search;
pub mod types;

pub use dataset::{DataProvider, SampleDataset, StaticDataset};
pub use enrich::{
    enrich, ConstantEntropy, EnrichRequest, EnrichedRecord, Enrichment, EnrichmentKind,
    EntropySource, ThreadEntropy,
};
pub use error::WebsetsError;
pub use search::{search, SearchRequest, SearchResults};
pub use types::{CompanyRecord, EngineerRecord, Record, RecordKind};
