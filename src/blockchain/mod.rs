// src/blockchain/mod.rs

pub mod client;
pub use client::{BalanceProvider, SolanaRpcClient};

pub mod models;
pub mod network;
pub mod services;
pub mod wallet_manager;

pub use models::{lamports_to_sol, LAMPORTS_PER_SOL};
pub use network::{Commitment, SolanaNetwork};
