//! Dining Table (mesa) Repository

use super::RepoResult;
use shared::models::{DiningTable, TableStatus};
use sqlx::{SqliteExecutor, SqlitePool};

/// Table row including its branch, which the wire model leaves out
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TableRecord {
    pub id: i64,
    pub branch_id: i64,
    pub name: String,
    pub status: TableStatus,
    pub started_at: Option<i64>,
}

impl TableRecord {
    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }
}

impl From<TableRecord> for DiningTable {
    fn from(r: TableRecord) -> Self {
        DiningTable {
            id: r.id,
            name: r.name,
            status: r.status,
            started_at: r.started_at,
        }
    }
}

pub async fn list_by_branch(pool: &SqlitePool, branch_id: i64) -> RepoResult<Vec<DiningTable>> {
    let rows = sqlx::query_as::<_, DiningTable>(
        "SELECT id, nombre AS name, estado AS status, iniciada_at AS started_at FROM mesas WHERE sucursal_id = ? ORDER BY id",
    )
    .bind(branch_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(
    executor: impl SqliteExecutor<'_>,
    id: i64,
) -> RepoResult<Option<TableRecord>> {
    let row = sqlx::query_as::<_, TableRecord>(
        "SELECT id, sucursal_id AS branch_id, nombre AS name, estado AS status, iniciada_at AS started_at FROM mesas WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

/// Mark a free table occupied. Returns the number of rows changed (0 when the
/// table is missing or already occupied).
pub async fn start_session(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    started_at: i64,
) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE mesas SET estado = 'ocupada', iniciada_at = ? WHERE id = ? AND estado = 'libre'",
    )
    .bind(started_at)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Free an occupied table. Returns the number of rows changed (0 when the
/// table is no longer occupied).
pub async fn release(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<u64> {
    let result = sqlx::query(
        "UPDATE mesas SET estado = 'libre', iniciada_at = NULL WHERE id = ? AND estado = 'ocupada'",
    )
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    branch_id: i64,
    name: &str,
) -> RepoResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO mesas (sucursal_id, nombre, estado) VALUES (?, ?, 'libre') RETURNING id",
    )
    .bind(branch_id)
    .bind(name)
    .fetch_one(executor)
    .await?;
    Ok(id)
}
