//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Named, recoverable failures surfaced by the registry and its caches.
///
/// Reads and sweeps never fail; absence is reported through `bool` and
/// `Option` return values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No cache is registered under the given name
    #[error("Cache not found: {0}")]
    CacheNotFound(String),

    /// `add` was called on a key that is already stored
    #[error("Key already exists: {0}")]
    KeyAlreadyExists(String),

    /// `update` was called on a key that is not stored
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::CacheNotFound(_) => StatusCode::NOT_FOUND,
            CacheError::KeyAlreadyExists(_) => StatusCode::CONFLICT,
            CacheError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
