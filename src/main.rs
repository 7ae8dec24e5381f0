// src/main.rs

use std::sync::Arc;

use anyhow::{Context, Result};
use solana_wallet_server::{
    api::create_router, blockchain::client::SolanaRpcClient, config::Config,
    wallet_storage::FileWalletStore, AppState,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- HTTP Server Logic ---
async fn run_http_server(state: AppState) -> Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 Server running on http://{}", addr);

    axum::serve(listener, app).await.context("HTTP server error")?;
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solana_wallet_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let rpc_client = match SolanaRpcClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Failed to initialize Solana RPC client: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Using Solana {} via {} (commitment: {})",
        config.network,
        rpc_client.rpc_url(),
        config.commitment
    );

    let wallet_store = FileWalletStore::new(config.wallet_file_path.clone());
    info!("Wallet file: {}", wallet_store.path().display());

    let app_state = AppState::new(config, Arc::new(wallet_store), Arc::new(rpc_client));

    if let Err(e) = run_http_server(app_state).await {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }
}
