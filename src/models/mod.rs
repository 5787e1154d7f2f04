//! Domain records and DTOs for the accounts API
//!
//! `account` holds the persisted entity; `requests` and `responses` define
//! the serialized HTTP request and response bodies.

pub mod account;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use account::{Account, NewAccount};
pub use requests::CreateAccountRequest;
pub use responses::{AccountResponse, ErrorResponse, HealthResponse};
