use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{debug, info};

use crate::{api::error::ApiError, AppState};

/// Response for wallet generation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWalletResponse {
    /// Base58 public key of the new wallet
    pub wallet_address: String,
}

/// Generate a new Solana wallet. The request body is ignored.
pub async fn generate_wallet_handler(
    State(state): State<AppState>,
) -> Result<Json<GenerateWalletResponse>, ApiError> {
    info!("Handling wallet generation request");

    match state.wallet_manager.generate_wallet().await {
        Ok(wallet) => Ok(Json(GenerateWalletResponse {
            wallet_address: wallet.public_key,
        })),
        Err(e) => {
            debug!("Wallet generation request failed: {}", e);
            Err(ApiError::WalletGeneration)
        }
    }
}
