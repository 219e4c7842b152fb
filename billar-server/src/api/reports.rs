//! Daily report API

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::DailyReport;

use super::extract::ApiQuery;
use super::{ApiResult, BranchQuery};
use crate::services::reports;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/reporte", get(today))
}

/// GET /reporte?sucursal_id= - 今日按支付方式汇总
pub async fn today(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BranchQuery>,
) -> ApiResult<DailyReport> {
    let report = reports::daily(&state.pool, query.branch_id(), reports::today()).await?;
    Ok(Json(report))
}
