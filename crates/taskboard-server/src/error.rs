//! API error type for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can surface to the client.
///
/// Repository absence is translated here into a 404; the repository itself
/// has no error paths. Malformed request bodies never reach this type —
/// the `Json` extractor rejects them first.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record of the named kind under the requested identity.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
