//! Request DTOs for the accounts API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};

// == Field Constraints ==
/// Minimum nickname length in characters
pub const NICKNAME_MIN_LENGTH: usize = 5;
/// Maximum nickname length in characters
pub const NICKNAME_MAX_LENGTH: usize = 30;

/// Request body for account creation (POST /api/v1/accounts)
///
/// # Fields
/// - `customerName`: Owner of the new account (mandatory)
/// - `accountNickname`: Optional display name, 5 to 30 characters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// The customer the account belongs to; null reads as blank
    #[serde(default, deserialize_with = "null_as_empty")]
    pub customer_name: String,
    /// Optional nickname
    #[serde(default)]
    pub account_nickname: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CreateAccountRequest {
    /// Creates a new request.
    pub fn new(customer_name: impl Into<String>, account_nickname: Option<&str>) -> Self {
        Self {
            customer_name: customer_name.into(),
            account_nickname: account_nickname.map(str::to_string),
        }
    }

    /// Validates the field-level constraints.
    ///
    /// Returns every failing message in field order; an empty list means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push("Customer name is mandatory".to_string());
        }

        if let Some(nickname) = &self.account_nickname {
            let length = nickname.chars().count();
            if !(NICKNAME_MIN_LENGTH..=NICKNAME_MAX_LENGTH).contains(&length) {
                errors.push(format!(
                    "Account nickname must be between {} and {} characters",
                    NICKNAME_MIN_LENGTH, NICKNAME_MAX_LENGTH
                ));
            }
        }

        errors
    }
}
