//! Error types for the Seabed API server.
//!
//! [`ObserverError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use seabed_core::CoreError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// The requested layer, day, or scenario was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A path segment or query parameter could not be parsed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The simulation could not be advanced.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ObserverError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::InvalidState(msg) => Self::InvalidState(msg),
            CoreError::World { source } => Self::Internal(source.to_string()),
        }
    }
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::InvalidState(msg) | Self::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use seabed_core::CoreError;

    use super::*;

    #[test]
    fn core_errors_map_to_status_codes() {
        let not_found: ObserverError = CoreError::NotFound("oil day 9".to_owned()).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let stuck: ObserverError = CoreError::InvalidState("stranded".to_owned()).into();
        assert_eq!(
            stuck.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let bad = ObserverError::InvalidQuery("day `x`".to_owned());
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
