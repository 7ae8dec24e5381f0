use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use tracing::debug;

use crate::blockchain::models::{SolanaKeypair, StoredWallet};

/// Generate a fresh Solana keypair from the OS RNG
pub fn generate_keypair() -> SolanaKeypair {
    let signing_key = SigningKey::generate(&mut OsRng);
    let keypair = SolanaKeypair::new(signing_key);
    debug!("Generated keypair {}", keypair.pubkey());
    keypair
}

/// Generate a keypair and serialize it into its stored form
pub fn create_wallet() -> Result<StoredWallet, serde_json::Error> {
    let keypair = generate_keypair();
    StoredWallet::from_keypair(&keypair)
}
