use reqwest::Client;
use serde_json::json;
use tracing::{debug, error};

use crate::blockchain::{
    client::BalanceProvider,
    models::{lamports_to_sol, BalanceError, RpcBalance, RpcError, RpcResponse},
    network::Commitment,
};

/// Query the raw lamport balance of `address` with a JSON-RPC `getBalance` call.
pub async fn get_balance_lamports(
    client: &Client,
    rpc_url: &str,
    address: &str,
    commitment: Commitment,
) -> Result<u64, RpcError> {
    let payload = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getBalance",
        "params": [address, { "commitment": commitment.as_str() }]
    });

    let res: RpcResponse<RpcBalance> = client
        .post(rpc_url)
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if let Some(err) = res.error {
        return Err(RpcError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    let balance = res.result.ok_or(RpcError::MissingResult)?;
    debug!("getBalance {} -> {} lamports", address, balance.value);
    Ok(balance.value)
}

/// Fetch the balance of `address` in SOL.
///
/// Provider failures are logged here and collapsed into
/// [`BalanceError::FetchFailed`].
pub async fn get_balance_sol(
    provider: &dyn BalanceProvider,
    address: &str,
) -> Result<f64, BalanceError> {
    match provider.get_balance(address).await {
        Ok(lamports) => Ok(lamports_to_sol(lamports)),
        Err(e) => {
            error!("Error fetching balance for {}: {}", address, e);
            Err(BalanceError::FetchFailed)
        }
    }
}
