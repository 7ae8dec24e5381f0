//! Wallet manager for generating and persisting Solana keypairs

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};

use crate::{
    blockchain::{
        models::{GeneratedWallet, WalletError},
        services::wallet,
    },
    wallet_storage::{StorageError, WalletStore},
};

/// Generates keypairs and hands them to the configured [`WalletStore`]
#[derive(Clone)]
pub struct WalletManager {
    store: Arc<dyn WalletStore>,
    /// Serializes generate-and-save so the stored file always matches the
    /// last wallet returned
    write_lock: Arc<Mutex<()>>,
}

impl WalletManager {
    pub fn new(store: Arc<dyn WalletStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Generate a new wallet, persist it and return its public key
    pub async fn generate_wallet(&self) -> Result<GeneratedWallet, WalletError> {
        let _guard = self.write_lock.lock().await;

        let stored = wallet::create_wallet().map_err(StorageError::from)?;
        if let Err(e) = self.store.save(&stored) {
            error!("Failed to save wallet to {}: {}", self.store.location(), e);
            return Err(e.into());
        }

        info!("Solana wallet created");
        info!("Public Key: {}", stored.public_key);
        info!("Private key saved to {}", self.store.location());

        Ok(GeneratedWallet {
            public_key: stored.public_key.clone(),
        })
    }
}
