//! Dining Table API

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use shared::models::{BillPreview, DiningTable, SessionStarted};

use super::extract::{ApiPath, ApiQuery};
use super::{ApiResult, BranchQuery};
use crate::db::repository::tables;
use crate::services::{require_branch, sessions};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mesas", get(list))
        .route("/mesas/{id}/iniciar", post(start))
        .route("/mesas/{id}/cuenta", get(bill))
}

/// GET /mesas?sucursal_id= - 分店全部桌台
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BranchQuery>,
) -> ApiResult<Vec<DiningTable>> {
    let branch_id = query.branch_id();
    require_branch(&state.pool, branch_id).await?;
    let tables = tables::list_by_branch(&state.pool, branch_id).await?;
    Ok(Json(tables))
}

/// POST /mesas/{id}/iniciar - 开台
pub async fn start(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<SessionStarted> {
    let started = sessions::start(&state.pool, id, shared::util::now_millis()).await?;
    Ok(Json(started))
}

/// GET /mesas/{id}/cuenta - 当前账单预览
pub async fn bill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<BillPreview> {
    let preview = sessions::preview(&state.pool, id, shared::util::now_millis()).await?;
    Ok(Json(preview))
}
