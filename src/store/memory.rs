//! In-Memory Account Store
//!
//! `AccountStore` backed by an insertion-ordered vector behind an async RwLock.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Account, NewAccount};
use crate::store::{AccountStore, StoreError, StoreResult};

// == In-Memory Store ==
/// Process-local account storage.
///
/// Ids are random UUIDs; account numbers are unique across all rows.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Returns true if no account is stored.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, account: NewAccount) -> StoreResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .iter()
            .any(|existing| existing.account_number == account.account_number)
        {
            return Err(StoreError::DuplicateAccountNumber(account.account_number));
        }

        let account = account.with_id(Uuid::new_v4().to_string());
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|account| account.id == id).cloned())
    }

    async fn find_by_account_number(&self, account_number: &str) -> StoreResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| account.account_number == account_number)
            .cloned())
    }

    async fn count_by_customer_name(&self, customer_name: &str) -> StoreResult<u64> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .filter(|account| account.customer_name == customer_name)
            .count() as u64)
    }

    async fn exists_by_id(&self, id: &str) -> StoreResult<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().any(|account| account.id == id))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter().position(|account| account.id == id) {
            Some(index) => {
                accounts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all(&self) -> StoreResult<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(number: &str, customer: &str) -> NewAccount {
        NewAccount::new(number, customer, None)
    }

    #[tokio::test]
    async fn test_store_new() {
        let store = InMemoryAccountStore::new();
        assert!(store.is_empty().await);
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = InMemoryAccountStore::new();

        let account = store.insert(new_account("1000000001", "Alice")).await.unwrap();

        assert!(!account.id.is_empty());
        assert!(Uuid::parse_str(&account.id).is_ok());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_number() {
        let store = InMemoryAccountStore::new();
        store.insert(new_account("1000000001", "Alice")).await.unwrap();

        let result = store.insert(new_account("1000000001", "Bob")).await;

        assert_eq!(
            result,
            Err(StoreError::DuplicateAccountNumber("1000000001".to_string()))
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_id_and_number() {
        let store = InMemoryAccountStore::new();
        let account = store.insert(new_account("1000000001", "Alice")).await.unwrap();

        let by_id = store.find_by_id(&account.id).await.unwrap();
        let by_number = store.find_by_account_number("1000000001").await.unwrap();

        assert_eq!(by_id, Some(account.clone()));
        assert_eq!(by_number, Some(account));
        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
        assert_eq!(store.find_by_account_number("1999999999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_count_by_customer_name() {
        let store = InMemoryAccountStore::new();
        store.insert(new_account("1000000001", "Alice")).await.unwrap();
        store.insert(new_account("1000000002", "Alice")).await.unwrap();
        store.insert(new_account("1000000003", "Bob")).await.unwrap();

        assert_eq!(store.count_by_customer_name("Alice").await.unwrap(), 2);
        assert_eq!(store.count_by_customer_name("Bob").await.unwrap(), 1);
        assert_eq!(store.count_by_customer_name("alice").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let store = InMemoryAccountStore::new();
        let account = store.insert(new_account("1000000001", "Alice")).await.unwrap();

        assert!(store.exists_by_id(&account.id).await.unwrap());
        assert!(store.delete_by_id(&account.id).await.unwrap());
        assert!(!store.exists_by_id(&account.id).await.unwrap());

        // A second delete finds nothing
        assert!(!store.delete_by_id(&account.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryAccountStore::new();
        for number in ["1000000003", "1000000001", "1000000002"] {
            store.insert(new_account(number, "Alice")).await.unwrap();
        }

        let numbers: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|account| account.account_number)
            .collect();

        assert_eq!(numbers, vec!["1000000003", "1000000001", "1000000002"]);
    }
}
