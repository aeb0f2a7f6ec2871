//! Error handling - translates gateway failures into HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::StoreError;
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type for route handlers.
#[derive(Debug)]
pub enum AppError {
    /// A required key was absent from the request body.
    MissingField(&'static str),
    /// The body id did not match the path id.
    IdMismatch { path: String, body: String },
    /// The body was present but could not be read as the expected shape.
    BadRequest(String),
    NotFound(String),
    Store(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing `{}` in request body", field),
            AppError::IdMismatch { path, body } => write!(
                f,
                "Request path id ({}) and request body id ({}) must match",
                path, body
            ),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::IdMismatch { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Validation failures reply with the message itself, in plain text.
            AppError::MissingField(_) | AppError::IdMismatch { .. } | AppError::BadRequest(_) => {
                tracing::error!("{}", self);
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            AppError::NotFound(detail) => {
                HttpResponse::NotFound().json(ErrorResponse::not_found(detail))
            }
            AppError::Store(err) => {
                // Logged server-side only - the response body stays generic.
                tracing::error!("Store error: {}", err);
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
