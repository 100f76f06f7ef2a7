//! In-process HTTP helpers: build requests, drive the router with
//! `tower::ServiceExt::oneshot`, decode the body.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use websets::api::{routes, AppState};
use websets::config::SearchConfig;

/// Router over the sample data with default search options and no layers.
pub fn sample_router() -> Router {
    routes::create_router(AppState::sample(SearchConfig::default()))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send `request` and parse the JSON body as `T`.
pub async fn send_request<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let (status, body) = send_request_raw(app, request).await;
    let parsed: T = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Failed to parse response: {e} - Body: {body:?}"));
    (status, parsed)
}

/// Send `request` and return the body as text.
pub async fn send_request_raw(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).to_string())
}
