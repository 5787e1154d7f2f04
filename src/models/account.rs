//! Account Entity
//!
//! The persisted savings account record and the insert payload handed to the store.

use serde::{Deserialize, Serialize};

// == Account ==
/// A persisted savings account.
///
/// Records are never updated in place: every field is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store-assigned identifier, used as the deletion key
    pub id: String,
    /// 10-digit external identifier, always starting with `1`
    pub account_number: String,
    /// Owner of the account; not unique across accounts
    pub customer_name: String,
    /// Optional display name chosen by the customer
    pub account_nickname: Option<String>,
}

// == New Account ==
/// An account that has passed validation and received its number,
/// but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub account_number: String,
    pub customer_name: String,
    pub account_nickname: Option<String>,
}

impl NewAccount {
    /// Creates a new insert payload.
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        account_nickname: Option<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            account_nickname,
        }
    }

    /// Attaches the store-assigned id, producing the persisted record.
    pub fn with_id(self, id: impl Into<String>) -> Account {
        Account {
            id: id.into(),
            account_number: self.account_number,
            customer_name: self.customer_name,
            account_nickname: self.account_nickname,
        }
    }
}
