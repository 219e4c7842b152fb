//! Consumption (consumo) Repository
//!
//! Entries are never updated except to attach them to a ticket at checkout.

use super::RepoResult;
use shared::models::Consumption;
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "id, ticket_id, mesa_id, producto_id, cantidad, precio, created_at";

pub async fn insert(
    executor: impl SqliteExecutor<'_>,
    table_id: i64,
    product_id: i64,
    quantity: i64,
    unit_price: f64,
    now: i64,
) -> RepoResult<Consumption> {
    let sql = format!(
        "INSERT INTO consumos (ticket_id, mesa_id, producto_id, cantidad, precio, created_at) VALUES (NULL, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, Consumption>(&sql)
        .bind(table_id)
        .bind(product_id)
        .bind(quantity)
        .bind(unit_price)
        .bind(now)
        .fetch_one(executor)
        .await?;
    Ok(row)
}

/// Entries of the table's open ledger (not yet on a ticket), oldest first
pub async fn find_open(
    executor: impl SqliteExecutor<'_>,
    table_id: i64,
) -> RepoResult<Vec<Consumption>> {
    let sql =
        format!("SELECT {COLUMNS} FROM consumos WHERE mesa_id = ? AND ticket_id IS NULL ORDER BY id");
    let rows = sqlx::query_as::<_, Consumption>(&sql)
        .bind(table_id)
        .fetch_all(executor)
        .await?;
    Ok(rows)
}

pub async fn find_by_ticket(pool: &SqlitePool, ticket_id: i64) -> RepoResult<Vec<Consumption>> {
    let sql = format!("SELECT {COLUMNS} FROM consumos WHERE ticket_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, Consumption>(&sql)
        .bind(ticket_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fold the table's open entries into a ticket. Returns how many were moved.
pub async fn attach_open_to_ticket(
    executor: impl SqliteExecutor<'_>,
    table_id: i64,
    ticket_id: i64,
) -> RepoResult<u64> {
    let result =
        sqlx::query("UPDATE consumos SET ticket_id = ? WHERE mesa_id = ? AND ticket_id IS NULL")
            .bind(ticket_id)
            .bind(table_id)
            .execute(executor)
            .await?;
    Ok(result.rows_affected())
}
