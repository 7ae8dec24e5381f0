use crate::{api::error::ApiError, blockchain::services::balance, utils, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Body of POST /get-balance. Only presence of the address is checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBalanceRequest {
    pub wallet_address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetBalanceResponse {
    /// Balance in SOL
    #[serde(serialize_with = "utils::serialize_amount")]
    pub balance: f64,
}

// The handler function for the POST /get-balance endpoint.
pub async fn get_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<GetBalanceRequest>, JsonRejection>,
) -> Result<Json<GetBalanceResponse>, ApiError> {
    let wallet_address = match payload {
        Ok(Json(req)) => req.wallet_address.filter(|address| !address.is_empty()),
        Err(rejection) => {
            debug!("Rejected get-balance body: {}", rejection);
            None
        }
    }
    .ok_or(ApiError::MissingWalletAddress)?;

    match balance::get_balance_sol(state.balance_provider.as_ref(), &wallet_address).await {
        Ok(balance) => Ok(Json(GetBalanceResponse { balance })),
        Err(e) => {
            debug!("Balance request for {} failed: {}", wallet_address, e);
            Err(ApiError::BalanceFetch)
        }
    }
}
