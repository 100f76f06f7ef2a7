//! websets-api — HTTP surface for the websets search and enrichment API.
//!
//! | Method | Path          | Handler                        |
//! |--------|---------------|--------------------------------|
//! | GET    | `/api`        | [`routes::catalogue`]          |
//! | GET    | `/api/health` | [`routes::health`]             |
//! | GET    | `/api/search` | [`routes::search`]             |
//! | POST   | `/api/enrich` | [`routes::enrich`]             |
//!
//! Handlers are thin: they parse the request, call into `websets-core`, and
//! map [`websets_core::WebsetsError`] onto [`error::ApiError`].

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use server::app;
pub use state::AppState;
