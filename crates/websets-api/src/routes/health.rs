//! Health check endpoint.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const HEALTH_MESSAGE: &str = "Websets API is running";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Always reports OK; there is no dependency that could be down.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: HEALTH_MESSAGE.to_string(),
    })
}
