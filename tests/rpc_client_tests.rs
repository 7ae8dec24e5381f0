//! Tests for the Solana JSON-RPC client

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use solana_wallet_server::blockchain::{
    client::{BalanceProvider, SolanaRpcClient},
    models::RpcError,
    network::Commitment,
};

const ADDRESS: &str = "4fYNw3dojWmQ4dXtSGE9epjRGy9pFSx62YypT7avPYvA";

fn client_for(server: &Server, commitment: Commitment) -> SolanaRpcClient {
    SolanaRpcClient::new(server.url(), commitment, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_get_balance_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "getBalance",
            "params": [ADDRESS, { "commitment": "confirmed" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "result": { "context": { "slot": 1 }, "value": 2_000_000_000u64 },
                "id": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, Commitment::Confirmed);
    let lamports = client.get_balance(ADDRESS).await.unwrap();

    mock.assert_async().await;
    assert_eq!(lamports, 2_000_000_000);
}

#[tokio::test]
async fn test_get_balance_sends_configured_commitment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "params": [ADDRESS, { "commitment": "finalized" }]
        })))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","result":{"context":{"slot":9},"value":0},"id":1}"#)
        .create_async()
        .await;

    let client = client_for(&server, Commitment::Finalized);
    assert_eq!(client.get_balance(ADDRESS).await.unwrap(), 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_balance_rpc_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(
            r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: Invalid"},"id":1}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, Commitment::Confirmed);
    let err = client.get_balance("X").await.unwrap_err();

    match err {
        RpcError::Rpc { code, message } => {
            assert_eq!(code, -32602);
            assert_eq!(message, "Invalid param: Invalid");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_balance_http_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = client_for(&server, Commitment::Confirmed);
    let err = client.get_balance(ADDRESS).await.unwrap_err();
    assert!(matches!(err, RpcError::Transport(_)));
}

#[tokio::test]
async fn test_get_balance_missing_result() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":1}"#)
        .create_async()
        .await;

    let client = client_for(&server, Commitment::Confirmed);
    let err = client.get_balance(ADDRESS).await.unwrap_err();
    assert!(matches!(err, RpcError::MissingResult));
}
