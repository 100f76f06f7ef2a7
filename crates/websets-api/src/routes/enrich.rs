//! Enrichment endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::instrument;
use websets_core::{EnrichRequest, EnrichedRecord};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/enrich", post(enrich))
}

/// 400 when id or type is missing, 404 when no such record exists.
#[instrument(skip(state, body))]
async fn enrich(
    State(state): State<AppState>,
    body: Result<Json<EnrichRequest>, JsonRejection>,
) -> Result<Json<EnrichedRecord>, ApiError> {
    let Json(request) = body?;
    let enriched = websets_core::enrich(state.data.as_ref(), state.entropy.as_ref(), &request)?;
    Ok(Json(enriched))
}
