//! Error type shared by the query layer.

use std::fmt::Display;

/// Failures the search/enrich pipeline can report.
///
/// Everything else (an unknown search kind, an unknown enrichment kind, an
/// empty query) is handled permissively and never surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebsetsError {
    /// A required request field is missing.
    #[error("{0}")]
    InvalidArgument(String),

    /// No record of this kind answers to this id. Both fields hold the
    /// values as the caller sent them.
    #[error("{kind} {id} not found")]
    NotFound { kind: String, id: String },
}

impl WebsetsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        WebsetsError::InvalidArgument(message.into())
    }

    pub fn not_found(kind: impl Display, id: impl Display) -> Self {
        WebsetsError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }
}

pub type Result<T, E = WebsetsError> = std::result::Result<T, E>;
