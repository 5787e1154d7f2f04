//! API Routes
//!
//! Configures the Axum router with all accounts endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_account_handler, delete_account_handler, get_account_handler, health_handler,
    list_accounts_handler, method_not_allowed_handler, not_found_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/v1/accounts` - Create an account
/// - `GET /api/v1/accounts` - List all accounts
/// - `GET /api/v1/accounts/:account` - Get an account by account number
/// - `DELETE /api/v1/accounts/:account` - Delete an account by id
/// - `GET /health` - Health check endpoint
///
/// Unknown paths answer 404 and unsupported methods 405, both as `ErrorResponse` JSON.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The lookup key is an account number for GET and an id for DELETE
    Router::new()
        .route(
            "/api/v1/accounts",
            get(list_accounts_handler)
                .post(create_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/v1/accounts/:account",
            get(get_account_handler)
                .delete(delete_account_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/health",
            get(health_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
