//! Response DTOs for the accounts API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::models::Account;

/// Account representation returned by create, get and list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Store-assigned identifier
    pub id: String,
    /// 10-digit account number
    pub account_number: String,
    /// Owner of the account
    pub customer_name: String,
    /// Optional nickname, serialized as null when absent
    pub account_nickname: Option<String>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number,
            customer_name: account.customer_name,
            account_nickname: account.account_nickname,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all non-2xx outcomes.
///
/// Exactly one of `message` and `messages` is present.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Time the error was produced, RFC 3339
    pub timestamp: String,
    /// Numeric HTTP status
    pub status: u16,
    /// Stable error category, e.g. "Not Found"
    pub error: String,
    /// Single human readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-level messages for request validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Creates an error body carrying a single message.
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
            error: error.into(),
            message: Some(message.into()),
            messages: None,
        }
    }

    /// Creates an error body carrying a list of field messages.
    pub fn with_messages(status: u16, error: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
            error: error.into(),
            message: None,
            messages: Some(messages),
        }
    }
}
