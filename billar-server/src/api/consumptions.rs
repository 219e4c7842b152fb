//! Consumption API

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use shared::models::{ConsumptionCreate, ConsumptionRecorded};

use super::ApiResult;
use super::extract::ApiJson;
use crate::services::ledger;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/consumos", post(create))
}

/// POST /consumos - 记录消费
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ConsumptionCreate>,
) -> ApiResult<ConsumptionRecorded> {
    let recorded = ledger::add_entry(&state.pool, &payload, shared::util::now_millis()).await?;
    Ok(Json(recorded))
}
