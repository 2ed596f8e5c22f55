//! HTTP mapping for domain errors
//!
//! Keeps `DomainError` HTTP-agnostic while giving every handler the same
//! status codes and JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use chirp::DomainError;

use crate::models::ErrorResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by route handlers
#[derive(Debug)]
pub enum ApiError {
    /// A path segment that should be a UUID is not one
    InvalidId { code: &'static str },
    Domain(DomainError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidId { code } => ErrorResponse::new("Invalid user ID", *code),
            ApiError::Domain(e @ DomainError::NotFound { .. }) => {
                ErrorResponse::new(e.to_string(), "NOT_FOUND")
            }
            ApiError::Domain(e @ DomainError::Validation(_)) => {
                ErrorResponse::new(e.to_string(), "VALIDATION_ERROR")
            }
            // Do not leak backend details to clients
            ApiError::Domain(DomainError::Storage(_)) => {
                ErrorResponse::new("Internal server error", "STORAGE_ERROR")
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::Domain(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Domain(DomainError::Storage(ref detail)) = self {
            tracing::error!(error = %detail, "Storage failure while handling request");
        }

        (self.status(), Json(self.body())).into_response()
    }
}
