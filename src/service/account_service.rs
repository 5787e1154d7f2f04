//! Account Service
//!
//! Orchestrates the account workflows against an `AccountStore` and a
//! `ReadCache`. Reads go through the cache; every successful write clears it.

use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CachedValue, ReadCache};
use crate::error::{AccountError, Result};
use crate::models::{Account, CreateAccountRequest, NewAccount};
use crate::service::account_number::generate_account_number;
use crate::store::{AccountStore, StoreError};
use crate::validation::{
    is_acceptable_nickname, within_account_limit, ACCOUNT_LIMIT_MESSAGE,
    OFFENSIVE_NICKNAME_MESSAGE,
};

/// Inserts rejected as duplicates after a clean existence check that are
/// retried with a fresh number before giving up.
pub const MAX_LATE_COLLISION_RETRIES: usize = 3;

const CREATE_FAILED: &str = "Failed to create account due to database error.";
const GET_FAILED: &str = "Failed to retrieve account due to database error.";
const LIST_FAILED: &str = "Failed to retrieve all accounts due to database error.";
const DELETE_FAILED: &str = "Failed to delete account due to database error.";

// == Account Service ==
/// Account workflows over injected store, cache and random source.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    cache: Arc<dyn ReadCache>,
    rng: Mutex<StdRng>,
}

impl AccountService {
    // == Constructors ==
    /// Creates a service with an entropy-seeded number generator.
    pub fn new(store: Arc<dyn AccountStore>, cache: Arc<dyn ReadCache>) -> Self {
        Self::with_rng(store, cache, StdRng::from_entropy())
    }

    /// Creates a service drawing account numbers from `rng`.
    pub fn with_rng(store: Arc<dyn AccountStore>, cache: Arc<dyn ReadCache>, rng: StdRng) -> Self {
        Self {
            store,
            cache,
            rng: Mutex::new(rng),
        }
    }

    // == Create ==
    /// Creates a new account for `request.customer_name`.
    ///
    /// The account limit and nickname checks run first; if either fails
    /// nothing is generated, stored or invalidated. A number that already
    /// exists is discarded and redrawn without limit.
    pub async fn create_account(&self, request: CreateAccountRequest) -> Result<Account> {
        self.check_business_rules(&request).await?;

        let mut late_collisions = 0;
        loop {
            let account_number = self.unused_account_number().await?;
            let new_account = NewAccount::new(
                account_number,
                request.customer_name.clone(),
                request.account_nickname.clone(),
            );

            match self.store.insert(new_account).await {
                Ok(account) => {
                    self.cache.invalidate_all().await?;
                    info!(
                        "Created account {} for customer '{}'",
                        account.account_number, account.customer_name
                    );
                    return Ok(account);
                }
                Err(StoreError::DuplicateAccountNumber(number))
                    if late_collisions < MAX_LATE_COLLISION_RETRIES =>
                {
                    late_collisions += 1;
                    warn!(
                        "Account number {} was taken during insert, retrying ({}/{})",
                        number, late_collisions, MAX_LATE_COLLISION_RETRIES
                    );
                }
                Err(err) => return Err(AccountError::database(CREATE_FAILED, err)),
            }
        }
    }

    // == Get ==
    /// Returns the account with `account_number`.
    pub async fn get_account(&self, account_number: &str) -> Result<Account> {
        let key = CacheKey::account_number(account_number);
        if let Some(CachedValue::Account(account)) = self.cache.get(&key).await? {
            debug!("Cache hit for account {}", account_number);
            return Ok(account);
        }

        let generation = self.cache.generation().await?;
        let account = self
            .store
            .find_by_account_number(account_number)
            .await
            .map_err(|err| AccountError::database(GET_FAILED, err))?
            .ok_or_else(|| {
                AccountError::NotFound(format!("Account with number {} not found.", account_number))
            })?;

        self.cache
            .put(key, CachedValue::Account(account.clone()), generation)
            .await?;
        Ok(account)
    }

    // == List ==
    /// Returns every account in store order.
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        if let Some(CachedValue::Accounts(accounts)) = self.cache.get(&CacheKey::AllAccounts).await? {
            debug!("Cache hit for account listing");
            return Ok(accounts);
        }

        let generation = self.cache.generation().await?;
        let accounts = self
            .store
            .find_all()
            .await
            .map_err(|err| AccountError::database(LIST_FAILED, err))?;

        self.cache
            .put(CacheKey::AllAccounts, CachedValue::Accounts(accounts.clone()), generation)
            .await?;
        Ok(accounts)
    }

    // == Delete ==
    /// Deletes the account with `id` and returns the id.
    pub async fn delete_account(&self, id: &str) -> Result<String> {
        let not_found = || AccountError::NotFound(format!("Account with ID {} not found.", id));

        let exists = self
            .store
            .exists_by_id(id)
            .await
            .map_err(|err| AccountError::database(DELETE_FAILED, err))?;
        if !exists {
            return Err(not_found());
        }

        let deleted = self
            .store
            .delete_by_id(id)
            .await
            .map_err(|err| AccountError::database(DELETE_FAILED, err))?;
        if !deleted {
            warn!("Account {} disappeared before it could be deleted", id);
            return Err(not_found());
        }

        self.cache.invalidate_all().await?;
        info!("Deleted account {}", id);
        Ok(id.to_string())
    }

    // == Business Rules ==
    async fn check_business_rules(&self, request: &CreateAccountRequest) -> Result<()> {
        let within_limit = within_account_limit(self.store.as_ref(), &request.customer_name)
            .await
            .map_err(|err| AccountError::database(CREATE_FAILED, err))?;
        if !within_limit {
            return Err(AccountError::AccountLimitExceeded(ACCOUNT_LIMIT_MESSAGE.to_string()));
        }

        if !is_acceptable_nickname(request.account_nickname.as_deref()) {
            return Err(AccountError::OffensiveNickname(OFFENSIVE_NICKNAME_MESSAGE.to_string()));
        }

        Ok(())
    }

    // == Number Generation ==
    /// Draws numbers until one is not present in the store.
    async fn unused_account_number(&self) -> Result<String> {
        loop {
            let candidate = self.next_account_number()?;
            let existing = self
                .store
                .find_by_account_number(&candidate)
                .await
                .map_err(|err| AccountError::database(CREATE_FAILED, err))?;

            match existing {
                None => return Ok(candidate),
                Some(_) => debug!("Account number {} already in use, redrawing", candidate),
            }
        }
    }

    fn next_account_number(&self) -> Result<String> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AccountError::Unexpected("account number generator is unavailable".into()))?;
        Ok(generate_account_number(&mut *rng))
    }
}
