//! Business services
//!
//! Each service takes the pool plus an explicit `now` (Unix millis) so the
//! clock stays at the HTTP edge and tests can pin time.

pub mod checkout;
pub mod ledger;
pub mod reports;
pub mod sessions;

use shared::error::{AppError, ErrorCode};
use sqlx::SqliteExecutor;

use crate::billing::Rate;
use crate::db::repository::{branches, rates};
use crate::error::ServiceResult;

/// Branch used when a request leaves `sucursal_id` out
pub const DEFAULT_BRANCH_ID: i64 = 1;

/// Fail with `BranchNotFound` unless the branch exists
pub async fn require_branch(
    executor: impl SqliteExecutor<'_>,
    branch_id: i64,
) -> ServiceResult<()> {
    if branches::exists(executor, branch_id).await? {
        Ok(())
    } else {
        Err(AppError::with_message(
            ErrorCode::BranchNotFound,
            format!("Branch {branch_id} not found"),
        )
        .with_detail("sucursal_id", branch_id)
        .into())
    }
}

/// Load and validate the branch's billing rate
pub async fn load_rate(executor: impl SqliteExecutor<'_>, branch_id: i64) -> ServiceResult<Rate> {
    let config = rates::find_by_branch(executor, branch_id)
        .await?
        .ok_or_else(|| rate_not_configured(branch_id))?;
    Ok(Rate::try_from(&config)?)
}

pub(crate) fn rate_not_configured(branch_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::RateNotConfigured,
        format!("No rate configured for branch {branch_id}"),
    )
    .with_detail("sucursal_id", branch_id)
}

pub(crate) fn table_not_found(table_id: i64) -> AppError {
    AppError::with_message(ErrorCode::TableNotFound, format!("Table {table_id} not found"))
        .with_detail("mesa_id", table_id)
}

pub(crate) fn table_not_occupied(table_id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::TableAlreadyFree,
        format!("Table {table_id} has no open session"),
    )
    .with_detail("mesa_id", table_id)
}
