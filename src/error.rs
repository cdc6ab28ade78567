use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ErrorResponse;

/// Errors surfaced by the HTTP layer. Validation problems carry their
/// message to the client; generation failures are collapsed into one
/// generic message and only logged in full.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("generation failed: {0}")]
    Generation(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Generation(err) => {
                tracing::error!("error generating blog content: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate content".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
