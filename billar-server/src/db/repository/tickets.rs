//! Ticket Repository

use super::RepoResult;
use shared::models::Ticket;
use sqlx::{SqliteExecutor, SqlitePool};

const COLUMNS: &str = "id, sucursal_id, mesa_id, minutos_fact, importe_tiempo, consumo_total, total, metodo_pago, efectivo_recibido, created_at";

/// Ticket values computed by checkout, before the row exists
#[derive(Debug, Clone)]
pub struct NewTicket<'a> {
    pub branch_id: i64,
    pub table_id: i64,
    pub billed_minutes: i64,
    pub time_charge: f64,
    pub consumption_total: f64,
    pub total: f64,
    pub payment_method: &'a str,
    pub amount_received: f64,
    pub created_at: i64,
}

pub async fn insert(executor: impl SqliteExecutor<'_>, new: &NewTicket<'_>) -> RepoResult<Ticket> {
    let sql = format!(
        "INSERT INTO tickets (sucursal_id, mesa_id, minutos_fact, importe_tiempo, consumo_total, total, metodo_pago, efectivo_recibido, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, Ticket>(&sql)
        .bind(new.branch_id)
        .bind(new.table_id)
        .bind(new.billed_minutes)
        .bind(new.time_charge)
        .bind(new.consumption_total)
        .bind(new.total)
        .bind(new.payment_method)
        .bind(new.amount_received)
        .bind(new.created_at)
        .fetch_one(executor)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Ticket>> {
    let sql = format!("SELECT {COLUMNS} FROM tickets WHERE id = ?");
    let row = sqlx::query_as::<_, Ticket>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Branch tickets created in `[from, to)` (Unix millis), newest first
pub async fn find_between(
    pool: &SqlitePool,
    branch_id: i64,
    from: i64,
    to: i64,
) -> RepoResult<Vec<Ticket>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM tickets WHERE sucursal_id = ? AND created_at >= ? AND created_at < ? ORDER BY created_at DESC, id DESC"
    );
    let rows = sqlx::query_as::<_, Ticket>(&sql)
        .bind(branch_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
