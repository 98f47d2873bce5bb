//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vocab_core::QuizError;

use crate::services::ingest::IngestError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        Self::Quiz(err.into())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Quiz(e) => (quiz_status(e), e.kind()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            success: false,
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

fn quiz_status(err: &QuizError) -> StatusCode {
    match err {
        QuizError::EmptyVocabulary | QuizError::NoValidRows | QuizError::Ingestion(_) => {
            StatusCode::BAD_REQUEST
        }
        QuizError::NoActiveQuestion | QuizError::NoActiveGame | QuizError::NoPassesLeft => {
            StatusCode::CONFLICT
        }
        QuizError::AudioUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
