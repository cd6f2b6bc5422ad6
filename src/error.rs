//! Error types for the Bookshelf server

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    ItemAlreadyExists = 16,
    BadValue = 18,
    UserIdentificationAlreadyExists = 19,
}

/// Why a copy of a book could not be lent or taken back
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("has no copies on the shelf")]
    NoCopies,

    #[error("was not borrowed by user '{0}'")]
    NotBorrowedBy(String),
}

/// Business rule violations raised by the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("user '{0}' is already registered")]
    DuplicateUser(String),

    #[error("user '{0}' is not registered")]
    UnknownUser(String),

    #[error("book '{0}' already exists")]
    DuplicateBook(String),

    #[error("book '{0}' is not in the library")]
    UnknownBook(String),

    #[error("book '{title}' {reason}")]
    BookUnavailable { title: String, reason: Unavailable },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::DuplicateUser(_) => ErrorCode::UserIdentificationAlreadyExists,
            CatalogError::UnknownUser(_) => ErrorCode::NoSuchUser,
            CatalogError::DuplicateBook(_) => ErrorCode::ItemAlreadyExists,
            CatalogError::UnknownBook(_) => ErrorCode::NoSuchItem,
            CatalogError::BookUnavailable { .. } => ErrorCode::ItemNotAvailable,
            CatalogError::InvalidArgument(_) => ErrorCode::BadValue,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::DuplicateUser(_)
            | CatalogError::DuplicateBook(_)
            | CatalogError::BookUnavailable { .. } => StatusCode::CONFLICT,
            CatalogError::UnknownUser(_) | CatalogError::UnknownBook(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
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
            AppError::Catalog(e) => (e.status(), e.code(), e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
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
