//! Error types for Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    Duplicate = 8,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Another record already carries this ISBN
    #[error("ISBN must be unique.")]
    DuplicateIsbn(String),

    /// Published year lies after the current calendar year
    #[error("Published year cannot be in the future.")]
    InvalidYear(i32),

    /// The store has no identifiers left to assign
    #[error("Book id space exhausted")]
    IdSpaceExhausted,
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchItem, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::DuplicateIsbn(isbn) => {
                tracing::debug!("Rejected duplicate ISBN {}", isbn);
                (StatusCode::BAD_REQUEST, ErrorCode::Duplicate, self.to_string())
            }
            AppError::InvalidYear(year) => {
                tracing::debug!("Rejected published year {}", year);
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, self.to_string())
            }
            AppError::IdSpaceExhausted => {
                tracing::error!("Cannot assign a new book id: id space exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    self.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
