// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every handler returns Result<_, ToddleError>
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum ToddleError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal server error")]
    #[allow(dead_code)]
    InternalError,
}

impl ToddleError {
    fn error_code(&self) -> &'static str {
        match self {
            ToddleError::NotFound(_) => "NOT_FOUND",
            ToddleError::AlreadyExists(_) => "ALREADY_EXISTS",
            ToddleError::InvalidInput(_) => "INVALID_INPUT",
            ToddleError::ValidationError(_) => "VALIDATION_ERROR",
            ToddleError::Unauthorized => "UNAUTHORIZED",
            ToddleError::InvalidCredentials => "INVALID_CREDENTIALS",
            ToddleError::Forbidden => "FORBIDDEN",
            ToddleError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ToddleError::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ToddleError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ToddleError::ValidationError(errors.to_string())
    }
}

/// Convert ToddleError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ToddleError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ToddleError::NotFound(_) => StatusCode::NOT_FOUND,
            ToddleError::AlreadyExists(_) => StatusCode::CONFLICT,
            ToddleError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ToddleError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ToddleError::Unauthorized => StatusCode::UNAUTHORIZED,
            ToddleError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ToddleError::Forbidden => StatusCode::FORBIDDEN,
            ToddleError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ToddleError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
