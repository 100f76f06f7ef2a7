//! API routes.

pub mod catalogue;
pub mod enrich;
pub mod health;
pub mod search;

use crate::state::AppState;
use axum::Router;

/// Creates the main API router. Every endpoint lives under `/api`.
pub fn create_router(state: AppState) -> Router {
    Router::new().nest("/api", api_routes()).with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalogue::routes())
        .merge(health::routes())
        .merge(search::routes())
        .merge(enrich::routes())
}
