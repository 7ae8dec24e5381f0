// src/lib.rs

use std::sync::Arc;

pub mod api;
pub mod blockchain;
pub mod config;
pub mod utils;
pub mod wallet_storage;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Generates and persists keypairs
    pub wallet_manager: blockchain::wallet_manager::WalletManager,
    /// Answers balance queries against the configured cluster
    pub balance_provider: Arc<dyn blockchain::client::BalanceProvider>,
}

impl AppState {
    pub fn new(
        config: config::Config,
        wallet_store: Arc<dyn wallet_storage::WalletStore>,
        balance_provider: Arc<dyn blockchain::client::BalanceProvider>,
    ) -> Self {
        Self {
            config,
            wallet_manager: blockchain::wallet_manager::WalletManager::new(wallet_store),
            balance_provider,
        }
    }
}
