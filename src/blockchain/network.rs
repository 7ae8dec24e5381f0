//! Named Solana clusters and commitment levels.

/// Solana clusters the server can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolanaNetwork {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
    /// A local `solana-test-validator`
    Localnet,
}

impl SolanaNetwork {
    /// Public RPC endpoint for the cluster
    pub fn rpc_url(&self) -> &'static str {
        match self {
            SolanaNetwork::MainnetBeta => "https://api.mainnet-beta.solana.com",
            SolanaNetwork::Testnet => "https://api.testnet.solana.com",
            SolanaNetwork::Devnet => "https://api.devnet.solana.com",
            SolanaNetwork::Localnet => "http://127.0.0.1:8899",
        }
    }
}

impl std::fmt::Display for SolanaNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolanaNetwork::MainnetBeta => write!(f, "mainnet-beta"),
            SolanaNetwork::Testnet => write!(f, "testnet"),
            SolanaNetwork::Devnet => write!(f, "devnet"),
            SolanaNetwork::Localnet => write!(f, "localnet"),
        }
    }
}

impl std::str::FromStr for SolanaNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(SolanaNetwork::MainnetBeta),
            "testnet" => Ok(SolanaNetwork::Testnet),
            "devnet" => Ok(SolanaNetwork::Devnet),
            "localnet" | "localhost" => Ok(SolanaNetwork::Localnet),
            _ => Err(format!("Unknown Solana network: {}", s)),
        }
    }
}

/// Commitment level sent with RPC queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "processed" => Ok(Commitment::Processed),
            "confirmed" => Ok(Commitment::Confirmed),
            "finalized" => Ok(Commitment::Finalized),
            _ => Err(format!("Unknown commitment level: {}", s)),
        }
    }
}
