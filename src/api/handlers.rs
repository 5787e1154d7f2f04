//! API Handlers
//!
//! HTTP request handlers for each accounts endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};

use crate::cache::{DisabledCache, InMemoryReadCache, ReadCache};
use crate::config::Config;
use crate::error::{AccountError, Result};
use crate::models::{AccountResponse, CreateAccountRequest, ErrorResponse, HealthResponse};
use crate::service::AccountService;
use crate::store::{AccountStore, InMemoryAccountStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account workflows
    pub service: Arc<AccountService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: AccountService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the in-memory store, with the read cache enabled or disabled per config.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
        let cache: Arc<dyn ReadCache> = if config.cache_enabled {
            Arc::new(InMemoryReadCache::new())
        } else {
            Arc::new(DisabledCache)
        };
        Self::new(AccountService::new(store, cache))
    }
}

/// Handler for POST /api/v1/accounts
///
/// Validates the body, then creates the account. Responds 201 with the new account.
pub async fn create_account_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>)> {
    let Json(req) = payload.map_err(|rejection| AccountError::Validation(rejection.body_text()))?;

    let errors = req.validate();
    if !errors.is_empty() {
        return Err(AccountError::ValidationField(errors));
    }

    let account = state.service.create_account(req).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// Handler for GET /api/v1/accounts/:account
///
/// Looks up an account by its account number.
pub async fn get_account_handler(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<AccountResponse>> {
    let account = state.service.get_account(&account_number).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Handler for GET /api/v1/accounts
pub async fn list_accounts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>> {
    let accounts = state.service.list_accounts().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Handler for DELETE /api/v1/accounts/:account
///
/// Deletes an account by id and responds with the id as plain text.
pub async fn delete_account_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String> {
    state.service.delete_account(&id).await
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for paths no route matches.
pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::NOT_FOUND;
    let body = ErrorResponse::new(
        status.as_u16(),
        "Not Found",
        format!("No endpoint at {}", uri.path()),
    );
    (status, Json(body))
}

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed_handler(
    method: Method,
    uri: Uri,
) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    let body = ErrorResponse::new(
        status.as_u16(),
        "Method Not Allowed",
        format!("{} is not supported on {}", method, uri.path()),
    );
    (status, Json(body))
}
