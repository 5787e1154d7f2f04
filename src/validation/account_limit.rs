//! Account Limit Check
//!
//! Caps the number of accounts a single customer may own.

use crate::store::{AccountStore, StoreResult};

/// Maximum number of accounts per customer name
pub const MAX_ACCOUNTS_PER_CUSTOMER: u64 = 5;

/// Message reported when the cap is reached
pub const ACCOUNT_LIMIT_MESSAGE: &str =
    "Customer has reached the maximum allowed number of accounts (5)";

/// Returns true if `customer_name` may open another account.
///
/// Blank names pass without touching the store; the field check rejects them.
pub async fn within_account_limit(
    store: &dyn AccountStore,
    customer_name: &str,
) -> StoreResult<bool> {
    if customer_name.trim().is_empty() {
        return Ok(true);
    }

    let existing = store.count_by_customer_name(customer_name).await?;
    Ok(existing < MAX_ACCOUNTS_PER_CUSTOMER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewAccount;
    use crate::store::InMemoryAccountStore;

    async fn store_with(customer: &str, count: u64) -> InMemoryAccountStore {
        let store = InMemoryAccountStore::new();
        for n in 0..count {
            store
                .insert(NewAccount::new(format!("1{:09}", n), customer, None))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_under_limit() {
        let store = store_with("CustomerA", 3).await;
        assert!(within_account_limit(&store, "CustomerA").await.unwrap());
        assert!(within_account_limit(&store, "NewCustomer").await.unwrap());
    }

    #[tokio::test]
    async fn test_one_below_limit() {
        let store = store_with("CustomerA", 4).await;
        assert!(within_account_limit(&store, "CustomerA").await.unwrap());
    }

    #[tokio::test]
    async fn test_at_limit() {
        let store = store_with("CustomerB", 5).await;
        assert!(!within_account_limit(&store, "CustomerB").await.unwrap());
    }

    #[tokio::test]
    async fn test_over_limit() {
        let store = store_with("CustomerC", 6).await;
        assert!(!within_account_limit(&store, "CustomerC").await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_name_passes() {
        let store = store_with("", 0).await;
        assert!(within_account_limit(&store, "").await.unwrap());
        assert!(within_account_limit(&store, "   ").await.unwrap());
    }
}
