//! API error types and handling.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use websets_core::WebsetsError;

/// API error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request field.
    #[error("{0}")]
    InvalidArgument(String),

    /// No record for the requested id and kind.
    #[error("{0}")]
    NotFound(String),
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ApiError::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<WebsetsError> for ApiError {
    fn from(err: WebsetsError) -> Self {
        match err {
            WebsetsError::InvalidArgument(message) => ApiError::InvalidArgument(message),
            not_found @ WebsetsError::NotFound { .. } => ApiError::NotFound(not_found.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}
