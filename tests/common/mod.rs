//! Shared test utilities for websets integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper is deterministic unless its name says
//! `fake_` or `random_`.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod http;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use http::*;
