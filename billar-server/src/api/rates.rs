//! Rate API

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::RateConfig;

use super::extract::ApiQuery;
use super::{ApiResult, BranchQuery};
use crate::db::repository::rates;
use crate::services::rate_not_configured;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/tarifas", get(get_rate))
}

/// GET /tarifas?sucursal_id= - 分店费率
pub async fn get_rate(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BranchQuery>,
) -> ApiResult<RateConfig> {
    let branch_id = query.branch_id();
    let rate = rates::find_by_branch(&state.pool, branch_id)
        .await?
        .ok_or_else(|| rate_not_configured(branch_id))?;
    Ok(Json(rate))
}
