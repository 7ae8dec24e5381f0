use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe, does not touch the RPC endpoint or the wallet file
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
