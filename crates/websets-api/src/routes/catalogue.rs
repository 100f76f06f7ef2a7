//! Machine-readable API catalogue served at `GET /api`.
//!
//! Mirrors what the documentation page shows a human: each endpoint with its
//! parameters, plus the enrichment blocks available per record kind.

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use websets_core::{EnrichmentKind, RecordKind};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<EndpointDoc>,
    /// Record kind (`engineer`, `company`) → enrichment block names.
    pub enrichments: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDoc {
    pub method: String,
    pub path: String,
    pub description: String,
    pub parameters: Vec<ParamDoc>,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

fn param(name: &str, ty: &str, description: &str) -> ParamDoc {
    ParamDoc {
        name: name.to_string(),
        ty: ty.to_string(),
        description: description.to_string(),
    }
}

fn endpoint(
    method: &str,
    path: &str,
    description: &str,
    parameters: Vec<ParamDoc>,
    example: &str,
) -> EndpointDoc {
    EndpointDoc {
        method: method.to_string(),
        path: path.to_string(),
        description: description.to_string(),
        parameters,
        example: example.to_string(),
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(catalogue))
}

async fn catalogue() -> Json<Catalogue> {
    Json(build())
}

/// Assemble the catalogue for the running binary.
pub fn build() -> Catalogue {
    let endpoints = vec![
        endpoint(
            "GET",
            "/api/search",
            "Search engineers or companies by case-insensitive substring",
            vec![
                param("query", "string", "Search query"),
                param("type", "string", "Type of search (engineers or companies)"),
                param("limit", "number", "Number of results (default: 50)"),
                param("offset", "number", "Pagination offset (default: 0)"),
            ],
            "/api/search?query=full-stack&type=engineers&limit=10",
        ),
        endpoint(
            "POST",
            "/api/enrich",
            "Attach enrichment blocks to a single engineer or company",
            vec![
                param("id", "number", "Item ID"),
                param("type", "string", "Type of item (engineer or company)"),
                param("enrichments", "array", "Array of enrichment types"),
            ],
            r#"{"id": 1, "type": "engineer", "enrichments": ["github", "email"]}"#,
        ),
        endpoint(
            "GET",
            "/api/health",
            "Service liveness",
            vec![],
            "/api/health",
        ),
    ];

    let enrichments: BTreeMap<String, Vec<String>> = RecordKind::ALL
        .into_iter()
        .map(|kind| {
            let names: Vec<String> = EnrichmentKind::for_record(kind)
                .into_iter()
                .map(|k| k.as_str().to_string())
                .collect();
            (kind.to_string(), names)
        })
        .collect();

    Catalogue {
        name: "websets".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
        enrichments,
    }
}
