//! Health check endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET / - Liveness probe.
///
/// Returns a fixed payload without touching storage.
#[axum::debug_handler]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "message": "Healthy" }))
}
