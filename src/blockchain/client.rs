//! RPC client for Solana clusters.
//!
//! [`BalanceProvider`] is the seam the HTTP layer depends on; the server wires
//! in [`SolanaRpcClient`], tests wire in stubs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::blockchain::{models::RpcError, network::Commitment, services::balance};
use crate::config::Config;

/// Source of on-chain lamport balances
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Raw balance of `address` in lamports
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError>;
}

/// JSON-RPC client bound to a single cluster endpoint
#[derive(Clone, Debug)]
pub struct SolanaRpcClient {
    http: Client,
    rpc_url: String,
    commitment: Commitment,
}

impl SolanaRpcClient {
    /// Create a client for `rpc_url`. Every request is bounded by `timeout`.
    pub fn new(
        rpc_url: impl Into<String>,
        commitment: Commitment,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            rpc_url: rpc_url.into(),
            commitment,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RpcError> {
        Self::new(config.rpc_url.clone(), config.commitment, config.rpc_timeout)
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl BalanceProvider for SolanaRpcClient {
    async fn get_balance(&self, address: &str) -> Result<u64, RpcError> {
        balance::get_balance_lamports(&self.http, &self.rpc_url, address, self.commitment).await
    }
}
