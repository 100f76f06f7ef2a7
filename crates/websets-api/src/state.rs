//! Application state shared across handlers.

use std::sync::Arc;

use websets_core::config::SearchConfig;
use websets_core::{DataProvider, EntropySource, SampleDataset, ThreadEntropy};

/// Shared application state.
///
/// Nothing in here is written after construction, so cloning per request
/// is just a handful of `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    /// Read-only record store.
    pub data: Arc<dyn DataProvider>,
    /// Randomness behind enrichment placeholders.
    pub entropy: Arc<dyn EntropySource>,
    /// Search defaults and empty-query behaviour.
    pub search: SearchConfig,
}

impl AppState {
    pub fn new(
        data: Arc<dyn DataProvider>,
        entropy: Arc<dyn EntropySource>,
        search: SearchConfig,
    ) -> Self {
        Self {
            data,
            entropy,
            search,
        }
    }

    /// Built-in sample records with an unseeded RNG.
    pub fn sample(search: SearchConfig) -> Self {
        Self::new(
            Arc::new(SampleDataset::new()),
            Arc::new(ThreadEntropy),
            search,
        )
    }

    /// Replace the entropy source, e.g. with a deterministic one in tests.
    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }
}
