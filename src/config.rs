// src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::blockchain::network::{Commitment, SolanaNetwork};

pub const DEFAULT_WALLET_FILE: &str = "solana_wallet.json";

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub host: String,
    pub port: u16,

    /// Solana cluster the balance queries go to
    pub network: SolanaNetwork,
    /// RPC endpoint, either the cluster default or an explicit override
    pub rpc_url: String,
    pub commitment: Commitment,
    pub rpc_timeout: Duration,

    // Wallet settings
    pub wallet_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let network = SolanaNetwork::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            network,
            rpc_url: network.rpc_url().to_string(),
            commitment: Commitment::default(),
            rpc_timeout: Duration::from_secs(30),
            wallet_file_path: PathBuf::from(DEFAULT_WALLET_FILE),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let network = match lookup("SOLANA_NETWORK") {
            Some(value) => value
                .parse::<SolanaNetwork>()
                .map_err(|e| anyhow!(e))
                .context("SOLANA_NETWORK must be one of mainnet-beta, testnet, devnet, localnet")?,
            None => defaults.network,
        };

        // An explicit RPC URL wins over the cluster default
        let rpc_url = match lookup("SOLANA_RPC_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                Url::parse(url.trim()).context("SOLANA_RPC_URL must be a valid URL")?;
                url.trim().to_string()
            }
            None => network.rpc_url().to_string(),
        };

        let commitment = match lookup("SOLANA_COMMITMENT") {
            Some(value) => value
                .parse::<Commitment>()
                .map_err(|e| anyhow!(e))
                .context("SOLANA_COMMITMENT must be one of processed, confirmed, finalized")?,
            None => defaults.commitment,
        };

        let rpc_timeout = match lookup("RPC_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(
                value
                    .parse::<u64>()
                    .context("RPC_TIMEOUT_SECS must be a valid number")?,
            ),
            None => defaults.rpc_timeout,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(value) => value.parse().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            network,
            rpc_url,
            commitment,
            rpc_timeout,
            wallet_file_path: lookup("WALLET_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.wallet_file_path),
        })
    }
}
