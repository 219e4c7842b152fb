//! Session tracker
//!
//! A session is the span a table stays occupied. Its start time lives on the
//! table row; elapsed time is always recomputed from it.

use shared::models::{BillPreview, SessionStarted};
use sqlx::SqlitePool;

use super::{ledger, load_rate, table_not_found, table_not_occupied};
use crate::billing::elapsed_minutes;
use crate::db::repository::tables;
use crate::error::ServiceResult;
use crate::money::to_f64;

/// Start a session on a free table
///
/// Starting an occupied table changes nothing and reports the original start.
pub async fn start(pool: &SqlitePool, table_id: i64, now: i64) -> ServiceResult<SessionStarted> {
    let changed = tables::start_session(pool, table_id, now).await?;
    let table = tables::find_by_id(pool, table_id)
        .await?
        .ok_or_else(|| table_not_found(table_id))?;

    let started = changed == 1;
    if started {
        tracing::info!(mesa_id = table_id, started_at = now, "Session started");
    } else {
        tracing::debug!(mesa_id = table_id, "Table already occupied, keeping original start");
    }

    Ok(SessionStarted {
        ok: true,
        mesa: table.into(),
        started,
    })
}

/// Live bill for an occupied table, computed the same way checkout does
pub async fn preview(pool: &SqlitePool, table_id: i64, now: i64) -> ServiceResult<BillPreview> {
    let table = tables::find_by_id(pool, table_id)
        .await?
        .ok_or_else(|| table_not_found(table_id))?;
    let started_at = table
        .started_at
        .filter(|_| table.is_occupied())
        .ok_or_else(|| table_not_occupied(table_id))?;

    let rate = load_rate(pool, table.branch_id).await?;
    let elapsed = elapsed_minutes(started_at, now);
    let billed = rate.bill(elapsed);
    let open = ledger::open_totals(pool, table_id).await?;

    Ok(BillPreview {
        mesa_id: table_id,
        inicio: started_at,
        minutos_transcurridos: to_f64(elapsed),
        minutos_fact: billed.minutes,
        importe_tiempo: billed.charge_f64(),
        consumo_total: open.total_f64(),
        items: open.items,
        total: to_f64(billed.charge + open.total),
    })
}
