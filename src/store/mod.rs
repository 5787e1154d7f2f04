//! Store Module
//!
//! Durable keyed storage of account records behind the `AccountStore` trait.
//! The in-memory implementation backs the default server.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Account, NewAccount};

pub use memory::InMemoryAccountStore;

// == Store Error ==
/// Failures reported by an `AccountStore`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The account number is already taken (uniqueness constraint)
    #[error("Duplicate account number: {0}")]
    DuplicateAccountNumber(String),

    /// The store could not be reached or failed to execute the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Account Store ==
/// Storage operations for savings accounts.
///
/// Implementations must reject an insert whose account number already exists
/// with `StoreError::DuplicateAccountNumber`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists a new account and returns it with its assigned id
    async fn insert(&self, account: NewAccount) -> StoreResult<Account>;

    /// Looks up an account by id
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Account>>;

    /// Looks up an account by its account number
    async fn find_by_account_number(&self, account_number: &str) -> StoreResult<Option<Account>>;

    /// Counts the accounts owned by a customer
    async fn count_by_customer_name(&self, customer_name: &str) -> StoreResult<u64>;

    /// Checks whether an account with this id exists
    async fn exists_by_id(&self, id: &str) -> StoreResult<bool>;

    /// Deletes an account by id. Returns false if no such row existed.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    /// Lists every account in store order
    async fn find_all(&self) -> StoreResult<Vec<Account>>;
}
