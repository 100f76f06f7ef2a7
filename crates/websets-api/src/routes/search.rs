//! Search endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use tracing::instrument;
use websets_core::{SearchRequest, SearchResults};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    /// `engineers` or `companies`; defaults to `engineers`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// A blank value (`limit=`) counts as absent.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub offset: Option<usize>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

#[instrument(skip(state, params))]
async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResults>, ApiError> {
    let Query(params) = params?;

    let request = SearchRequest::for_kind_str(
        params.query.unwrap_or_default(),
        params.kind.as_deref().unwrap_or("engineers"),
    )
    .limit(params.limit.unwrap_or(state.search.default_limit))
    .offset(params.offset.unwrap_or(0));

    Ok(Json(websets_core::search(
        state.data.as_ref(),
        &request,
        &state.search,
    )))
}
