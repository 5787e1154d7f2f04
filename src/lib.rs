//! Savings Account - A small REST service for savings accounts
//!
//! Creates, retrieves, lists and deletes accounts, with a per-customer
//! account cap, a nickname denylist and a read cache in front of the store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod validation;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::AccountError;
pub use service::AccountService;
