//! Error types for the accounts service
//!
//! Provides unified error handling using thiserror. Every failure is carried
//! as an `AccountError` and translated to an HTTP status only at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::cache::CacheError;
use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Account Error Enum ==
/// Unified error type for the accounts service.
#[derive(Error, Debug)]
pub enum AccountError {
    /// One or more request fields failed their constraints
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationField(Vec<String>),

    /// The customer already owns the maximum number of accounts
    #[error("{0}")]
    AccountLimitExceeded(String),

    /// The nickname is denylisted
    #[error("{0}")]
    OffensiveNickname(String),

    /// The requested account does not exist
    #[error("{0}")]
    NotFound(String),

    /// The store failed; the cause is kept for logs only
    #[error("{message}")]
    DatabaseOperation {
        message: String,
        #[source]
        source: StoreError,
    },

    /// The request could not be read
    #[error("{0}")]
    Validation(String),

    /// Anything not classified above
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl AccountError {
    /// Wraps a store failure with a caller-facing message.
    pub fn database(message: impl Into<String>, source: StoreError) -> Self {
        AccountError::DatabaseOperation {
            message: message.into(),
            source,
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::ValidationField(_)
            | AccountError::AccountLimitExceeded(_)
            | AccountError::OffensiveNickname(_)
            | AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::DatabaseOperation { .. } | AccountError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable category string rendered in the `error` field.
    pub fn category(&self) -> &'static str {
        match self {
            AccountError::ValidationField(_) => "Validation Failed",
            AccountError::AccountLimitExceeded(_) | AccountError::OffensiveNickname(_) => {
                "Bad Request"
            }
            AccountError::NotFound(_) => "Not Found",
            AccountError::DatabaseOperation { .. } => "Database Error",
            AccountError::Validation(_) => "Validation Error",
            AccountError::Unexpected(_) => "Internal Server Error",
        }
    }
}

impl From<CacheError> for AccountError {
    fn from(err: CacheError) -> Self {
        AccountError::Unexpected(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.category();

        let body = match self {
            AccountError::ValidationField(messages) => {
                ErrorResponse::with_messages(status.as_u16(), category, messages)
            }
            AccountError::DatabaseOperation { message, source } => {
                error!("{}: {}", message, source);
                ErrorResponse::new(status.as_u16(), category, message)
            }
            AccountError::Unexpected(detail) => {
                let message = format!("An unexpected error occurred: {}", detail);
                error!("{}", message);
                ErrorResponse::new(status.as_u16(), category, message)
            }
            other => ErrorResponse::new(status.as_u16(), category, other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the accounts service.
pub type Result<T> = std::result::Result<T, AccountError>;
