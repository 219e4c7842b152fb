//! Ticket API

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use shared::models::{CloseTicketRequest, CloseTicketResponse, TicketHistory};

use super::extract::{ApiJson, ApiQuery};
use super::{ApiResult, BranchQuery};
use crate::services::{checkout, reports};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(list_today))
        .route("/tickets/cerrar", post(close))
}

/// POST /tickets/cerrar - 结账并释放桌台
pub async fn close(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CloseTicketRequest>,
) -> ApiResult<CloseTicketResponse> {
    let ticket = checkout::close(&state.pool, &payload, shared::util::now_millis()).await?;
    Ok(Json(CloseTicketResponse { ok: true, ticket }))
}

/// GET /tickets?sucursal_id= - 今日小票，最新在前
pub async fn list_today(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BranchQuery>,
) -> ApiResult<TicketHistory> {
    let history = reports::history(&state.pool, query.branch_id(), reports::today()).await?;
    Ok(Json(history))
}
