//! Mapping of handler failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::client::TransportError;

/// Failure of a consumer route.
#[derive(Debug)]
pub enum ApiError {
    /// The upstream list request failed.
    Upstream(TransportError),
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => {
                tracing::warn!(
                    error = %e,
                    upstream_status = ?e.status(),
                    "Upstream request failed"
                );
                (StatusCode::BAD_GATEWAY, format!("Upstream request failed: {}", e)).into_response()
            }
        }
    }
}
