//! Branch (sucursal) Repository

use super::RepoResult;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn exists(executor: impl SqliteExecutor<'_>, branch_id: i64) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM sucursales WHERE id = ?")
        .bind(branch_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sucursales")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    name: &str,
    address: Option<&str>,
) -> RepoResult<i64> {
    let (id,): (i64,) =
        sqlx::query_as("INSERT INTO sucursales (nombre, direccion) VALUES (?, ?) RETURNING id")
            .bind(name)
            .bind(address)
            .fetch_one(executor)
            .await?;
    Ok(id)
}
