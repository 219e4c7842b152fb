//! Product Repository

use super::RepoResult;
use shared::models::Product;
use sqlx::{SqliteExecutor, SqlitePool};

pub async fn list_by_branch(pool: &SqlitePool, branch_id: i64) -> RepoResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(
        "SELECT id, nombre AS name, precio AS price, categoria AS category FROM productos WHERE sucursal_id = ? ORDER BY nombre, id",
    )
    .bind(branch_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find a product only if it belongs to the given branch
pub async fn find_in_branch(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    branch_id: i64,
) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(
        "SELECT id, nombre AS name, precio AS price, categoria AS category FROM productos WHERE id = ? AND sucursal_id = ?",
    )
    .bind(id)
    .bind(branch_id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    branch_id: i64,
    name: &str,
    price: f64,
    category: Option<&str>,
) -> RepoResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO productos (sucursal_id, nombre, precio, categoria) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(branch_id)
    .bind(name)
    .bind(price)
    .bind(category)
    .fetch_one(executor)
    .await?;
    Ok(id)
}
