//! # API Errors
//!
//! Error types for the HTTP surface and their response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
///
/// The taxonomy is deliberately small: a payload that failed structural
/// decoding, a replace against an absent identifier, and an unsupported
/// verb on a known path. Store operations have no other failure modes.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body failed structural decoding; carries the raw decode
    /// error text, which becomes the response body.
    #[error("{0}")]
    BadRequest(String),

    /// Referenced card identifier does not exist
    #[error("Card not found")]
    NotFound,

    /// Unsupported HTTP method on a known path
    #[error("Invalid method")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Error bodies are plain text: the fixed messages for 404/405,
        // the decoder's own message for 400.
        (self.status_code(), self.to_string()).into_response()
    }
}
