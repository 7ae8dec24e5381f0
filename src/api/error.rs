use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors returned to HTTP clients as `{"error": "<message>"}`
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Wallet address is required")]
    MissingWalletAddress,
    #[error("Failed to fetch balance")]
    BalanceFetch,
    #[error("Failed to generate wallet")]
    WalletGeneration,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingWalletAddress => StatusCode::BAD_REQUEST,
            ApiError::BalanceFetch | ApiError::WalletGeneration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
