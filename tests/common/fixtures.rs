//! Static fixtures used across harnesses.

use websets::StaticDataset;

use crate::common::builders::{CompanyBuilder, EngineerBuilder};

/// Names of the built-in sample engineers, in dataset order.
pub const SAMPLE_ENGINEERS: &[&str] = &[
    "Michael Zhang",
    "Sarah Johnson",
    "Thomas Park",
    "Elena Rodriguez",
    "Alex Rivera",
];

/// Names of the built-in sample companies, in dataset order.
pub const SAMPLE_COMPANIES: &[&str] = &["Hadrius", "Fairway Health", "Pointwise", "Shortbread", "SPRX"];

/// Queries with a mix of hit rates against the sample data.
pub const QUERIES: &[&str] = &[
    "",
    "a",
    "ai",
    "python",
    "engineer",
    "full-stack",
    "consumer",
    "health",
    "REACT",
    "zzz",
    " ",
];

/// A hand-written dataset exercising sparse records and mixed case.
///
/// - engineer 1 has only a name
/// - engineer 2 matches "rust" through `skills` only
/// - engineer 3 mentions "Rust" only in `location`, which is not searched
/// - company 1 shares id 1 with engineer 1
pub fn sparse_dataset() -> StaticDataset {
    StaticDataset::new(
        vec![
            EngineerBuilder::new(1, "Grace Hopper").build(),
            EngineerBuilder::new(2, "Linus Torvalds")
                .position("Maintainer")
                .skills("C, RUST, Git")
                .build(),
            EngineerBuilder::new(3, "Ken Thompson")
                .company("Bell Labs")
                .location("Rust Belt")
                .build(),
        ],
        vec![
            CompanyBuilder::new(1, "Oxide")
                .description("Rack-scale computers")
                .industries("Hardware, Rust")
                .build(),
            CompanyBuilder::new(2, "Ferrous").build(),
        ],
    )
}
