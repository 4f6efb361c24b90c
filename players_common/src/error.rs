use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure of a single request. Every variant carries a static message that is
/// sent to the client as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete client input.
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    /// Query, write or decode failure. `details` is only filled in by the
    /// callers that echo the underlying cause back to the client.
    #[error("{message}")]
    Storage {
        message: &'static str,
        details: Option<String>,
    },
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn storage(message: &'static str) -> Self {
        ApiError::Storage { message, details: None }
    }

    pub fn storage_with_details(message: &'static str, details: impl ToString) -> Self {
        ApiError::Storage {
            message,
            details: Some(details.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => ErrorResponse {
                error: message,
                details: None,
            },
            ApiError::Storage { message, details } => ErrorResponse {
                error: message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Body for the plain `{"message": ...}` success responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}
