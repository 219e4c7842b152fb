//! Product API

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::Product;

use super::extract::ApiQuery;
use super::{ApiResult, BranchQuery};
use crate::db::repository::products;
use crate::services::require_branch;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/productos", get(list))
}

/// GET /productos?sucursal_id= - 分店商品，按名称排序
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BranchQuery>,
) -> ApiResult<Vec<Product>> {
    let branch_id = query.branch_id();
    require_branch(&state.pool, branch_id).await?;
    let products = products::list_by_branch(&state.pool, branch_id).await?;
    Ok(Json(products))
}
