// src/blockchain/models.rs
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::wallet_storage::StorageError;

/// Number of lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a raw lamport amount to SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

// --- Error types ---

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("RPC response missing 'result' field")]
    MissingResult,
}

/// Generic error surfaced to callers of the balance fetcher. The cause is
/// logged at the fetch boundary and not carried further.
#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("Error fetching balance")]
    FetchFailed,
}

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("failed to persist wallet: {0}")]
    Storage(#[from] StorageError),
}

// --- Wallet Models ---

/// A Solana keypair (ed25519)
pub struct SolanaKeypair {
    signing_key: SigningKey,
}

impl SolanaKeypair {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Base58 encoding of the public key, i.e. the account address
    pub fn pubkey(&self) -> String {
        bs58::encode(self.signing_key.verifying_key().to_bytes()).into_string()
    }

    /// The 64-byte Solana secret key: seed followed by public key
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }
}

/// On-disk representation of the last generated keypair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct StoredWallet {
    /// Base58 public key
    pub public_key: String,
    /// Secret key bytes as JSON array text, e.g. "[12,250,...]"
    pub private_key: String,
}

impl StoredWallet {
    pub fn from_keypair(keypair: &SolanaKeypair) -> Result<Self, serde_json::Error> {
        let secret = keypair.secret_key_bytes();
        Ok(Self {
            public_key: keypair.pubkey(),
            private_key: serde_json::to_string(&secret[..])?,
        })
    }
}

impl std::fmt::Debug for StoredWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredWallet")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Result of a wallet generation
#[derive(Debug, Clone)]
pub struct GeneratedWallet {
    pub public_key: String,
}

// --- RPC Models ---

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// `getBalance` result, wrapped in the usual Solana response context
#[derive(Debug, Deserialize)]
pub struct RpcBalance {
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(2_000_000_000), 2.0);
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(0), 0.0);
        assert_eq!(lamports_to_sol(1), 0.000000001);
    }

    #[test]
    fn test_stored_wallet_debug_hides_secret() {
        let wallet = StoredWallet {
            public_key: "pubkey".to_string(),
            private_key: "[1,2,3]".to_string(),
        };
        let rendered = format!("{:?}", wallet);
        assert!(rendered.contains("pubkey"));
        assert!(!rendered.contains("[1,2,3]"));
    }

    #[test]
    fn test_stored_wallet_field_names() {
        let wallet = StoredWallet {
            public_key: "abc".to_string(),
            private_key: "[1]".to_string(),
        };
        let value = serde_json::to_value(&wallet).unwrap();
        assert_eq!(value, serde_json::json!({"publicKey": "abc", "privateKey": "[1]"}));
    }
}
