use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "env": state.config.app_env,
        "ai_enabled": state.ai_enabled(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
