//! Health check endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use super::ApiResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - liveness plus a database round trip
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Value> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok(Json(json!({
        "ok": true,
        "status": "ok",
        "service": "billar-server",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
