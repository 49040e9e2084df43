use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::MSG_HEALTH;
use crate::AppState;

/// Health check endpoint
///
/// Static liveness probe, does not touch the data directory.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": MSG_HEALTH,
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
