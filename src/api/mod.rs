//! API Module
//!
//! HTTP handlers and routing for the accounts REST API.
//!
//! # Endpoints
//! - `POST /api/v1/accounts` - Create an account
//! - `GET /api/v1/accounts` - List all accounts
//! - `GET /api/v1/accounts/:account` - Get an account by account number
//! - `DELETE /api/v1/accounts/:account` - Delete an account by id
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
