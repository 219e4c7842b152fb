//! Checkout transaction
//!
//! Closes a table session in one database transaction:
//!
//! 1. load the table and require it to be occupied in the requested branch
//! 2. bill the session (request overrides win over computed values)
//! 3. insert the ticket
//! 4. free the table, guarded by `estado = 'ocupada'`
//! 5. fold the open ledger into the ticket
//! 6. commit
//!
//! Any failure drops the transaction, which rolls every step back and leaves
//! the table occupied.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{CloseTicketRequest, DEFAULT_PAYMENT_METHOD, Ticket};
use sqlx::SqlitePool;

use super::{DEFAULT_BRANCH_ID, ledger, load_rate, table_not_found, table_not_occupied};
use crate::billing::BilledTime;
use crate::db::repository::tables;
use crate::db::repository::tickets::{self, NewTicket};
use crate::error::ServiceResult;
use crate::money::{is_valid_amount, to_decimal, to_f64};

/// Longest accepted payment method label
pub const MAX_PAYMENT_METHOD_LEN: usize = 20;

/// Largest billed-minutes override accepted, one week
pub const MAX_BILLED_MINUTES: i64 = 60 * 24 * 7;

/// Normalize the payment method: trimmed, lowercase, `efectivo` when absent
pub fn normalize_payment_method(method: Option<&str>) -> Result<String, AppError> {
    let method = match method.map(str::trim) {
        None => return Ok(DEFAULT_PAYMENT_METHOD.to_string()),
        Some(m) => m,
    };
    if method.is_empty() || method.chars().count() > MAX_PAYMENT_METHOD_LEN {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidMethod,
            format!("Payment method must be 1 to {MAX_PAYMENT_METHOD_LEN} characters"),
        )
        .with_detail("metodo_pago", method));
    }
    Ok(method.to_lowercase())
}

fn require_amount(value: Option<f64>, field: &str) -> Result<Option<f64>, AppError> {
    match value {
        Some(v) if !is_valid_amount(v) => Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("{field} must be a finite non-negative amount, got {v}"),
        )
        .with_detail("field", field)),
        other => Ok(other),
    }
}

/// Close the table's session and persist its ticket
pub async fn close(
    pool: &SqlitePool,
    req: &CloseTicketRequest,
    now: i64,
) -> ServiceResult<Ticket> {
    let branch_id = req.sucursal_id.unwrap_or(DEFAULT_BRANCH_ID);
    let table_id = req.mesa_id;

    // Validate everything that needs no database before opening the transaction
    let payment_method = normalize_payment_method(req.metodo_pago.as_deref())?;
    let time_override = require_amount(req.importe_tiempo, "importe_tiempo")?;
    let consumption_override = require_amount(req.consumo_total, "consumo_total")?;
    let received = require_amount(req.efectivo_recibido, "efectivo_recibido")?;
    if let Some(minutes) = req.minutos_fact
        && !(0..=MAX_BILLED_MINUTES).contains(&minutes)
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("minutos_fact must be between 0 and {MAX_BILLED_MINUTES}, got {minutes}"),
        )
        .with_detail("minutos_fact", minutes)
        .into());
    }

    let mut tx = pool.begin().await?;

    // 1. Table must exist, belong to the branch and be occupied
    let table = tables::find_by_id(&mut *tx, table_id)
        .await?
        .filter(|t| t.branch_id == branch_id)
        .ok_or_else(|| table_not_found(table_id).with_detail("sucursal_id", branch_id))?;
    let started_at = match (table.is_occupied(), table.started_at) {
        (true, Some(start)) => start,
        _ => return Err(table_not_occupied(table_id).into()),
    };

    // 2. Bill time and consumption
    let billed = match (req.minutos_fact, time_override) {
        (Some(minutes), Some(charge)) => BilledTime {
            minutes,
            charge: to_decimal(charge),
        },
        (minutes, charge) => {
            let rate = load_rate(&mut *tx, branch_id).await?;
            let mut billed = match minutes {
                Some(m) => BilledTime {
                    minutes: m,
                    charge: rate.charge_for(m),
                },
                None => rate.bill_span(started_at, now),
            };
            if let Some(c) = charge {
                billed.charge = to_decimal(c);
            }
            billed
        }
    };
    let consumption: Decimal = match consumption_override {
        Some(c) => to_decimal(c),
        None => ledger::open_totals(&mut *tx, table_id).await?.total,
    };
    let total = to_f64(billed.charge + consumption);
    if !is_valid_amount(total) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Ticket total {total} exceeds the maximum amount"),
        )
        .with_detail("mesa_id", table_id)
        .into());
    }

    // 3. Ticket
    let ticket = tickets::insert(
        &mut *tx,
        &NewTicket {
            branch_id,
            table_id,
            billed_minutes: billed.minutes,
            time_charge: billed.charge_f64(),
            consumption_total: to_f64(consumption),
            total,
            payment_method: &payment_method,
            amount_received: received.unwrap_or(total),
            created_at: now,
        },
    )
    .await?;

    // 4. Release the table, only if it is still occupied
    if tables::release(&mut *tx, table_id).await? == 0 {
        tracing::warn!(
            mesa_id = table_id,
            "Table was released concurrently, aborting checkout"
        );
        return Err(table_not_occupied(table_id).into());
    }

    // 5. Fold the open ledger into the ticket
    let folded = ledger::clear(&mut *tx, table_id, ticket.id).await?;

    // 6. Commit
    tx.commit().await?;

    tracing::info!(
        ticket_id = ticket.id,
        mesa_id = table_id,
        sucursal_id = branch_id,
        minutos_fact = ticket.minutos_fact,
        total = ticket.total,
        metodo_pago = %ticket.metodo_pago,
        consumos = folded,
        "Table closed"
    );

    Ok(ticket)
}
