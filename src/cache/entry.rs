//! Cache Entry Module
//!
//! Typed keys and values held by the read cache.

use crate::models::Account;

// == Cache Key ==
/// Key under which a read result is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A single account looked up by account number
    AccountNumber(String),
    /// The full account listing
    AllAccounts,
}

impl CacheKey {
    /// Creates a key for a single-account lookup.
    pub fn account_number(account_number: impl Into<String>) -> Self {
        CacheKey::AccountNumber(account_number.into())
    }
}

// == Cached Value ==
/// A cached read result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    /// Result of a lookup by account number
    Account(Account),
    /// Result of listing every account, in store order
    Accounts(Vec<Account>),
}
