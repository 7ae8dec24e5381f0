//! # API Module
//!
//! HTTP handlers for the Solana wallet server.
//!
//! ## Available Endpoints
//!
//! - `POST /generate-wallet` - Generate a keypair, persist it, return the public key
//! - `POST /get-balance` - Get the SOL balance of `walletAddress`
//! - `GET /health` - Liveness check

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub mod balance;
pub mod error;
pub mod health;
pub mod wallet;

pub use error::ApiError;

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-wallet", post(wallet::generate_wallet_handler))
        .route("/get-balance", post(balance::get_balance_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
