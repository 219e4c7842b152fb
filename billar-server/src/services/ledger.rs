//! Consumption ledger
//!
//! Per-table running charges for products sold during a session. Entries are
//! append-only; the open ledger of a table is every entry not yet attached to
//! a ticket. Totals are summed in `Decimal` and rounded only when read.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{ConsumptionCreate, ConsumptionRecorded};
use sqlx::{SqliteExecutor, SqlitePool};

use super::{table_not_found, table_not_occupied};
use crate::db::repository::{RepoResult, consumptions, products, tables};
use crate::error::ServiceResult;
use crate::money::{is_valid_amount, to_decimal, to_f64};

/// Largest quantity accepted for one entry
pub const MAX_QUANTITY: i64 = 9999;

/// Running state of a table's open ledger
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpenLedger {
    /// Exact sum of `price * quantity`
    pub total: Decimal,
    /// Sum of quantities
    pub items: i64,
}

impl OpenLedger {
    pub fn total_f64(&self) -> f64 {
        to_f64(self.total)
    }
}

/// Record `cantidad` units of a product against a table at the current price
pub async fn add_entry(
    pool: &SqlitePool,
    input: &ConsumptionCreate,
    now: i64,
) -> ServiceResult<ConsumptionRecorded> {
    if !(1..=MAX_QUANTITY).contains(&input.cantidad) {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!(
                "Quantity must be between 1 and {MAX_QUANTITY}, got {}",
                input.cantidad
            ),
        )
        .with_detail("cantidad", input.cantidad)
        .into());
    }
    if input.ticket_id.is_some() {
        tracing::debug!(
            mesa_id = input.mesa_id,
            "Ignoring ticket_id on new consumption, entries join the open ledger"
        );
    }

    let table = tables::find_by_id(pool, input.mesa_id)
        .await?
        .ok_or_else(|| table_not_found(input.mesa_id))?;
    if !table.is_occupied() {
        return Err(table_not_occupied(table.id).into());
    }

    let product = products::find_in_branch(pool, input.producto_id, table.branch_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!(
                    "Product {} not found in branch {}",
                    input.producto_id, table.branch_id
                ),
            )
            .with_detail("producto_id", input.producto_id)
        })?;
    if !is_valid_amount(product.price) {
        return Err(AppError::with_message(
            ErrorCode::ProductInvalidPrice,
            format!("Product {} has an invalid price", product.id),
        )
        .into());
    }

    let consumo = consumptions::insert(
        pool,
        table.id,
        product.id,
        input.cantidad,
        product.price,
        now,
    )
    .await?;
    let open = open_totals(pool, table.id).await?;

    tracing::info!(
        mesa_id = table.id,
        producto_id = product.id,
        cantidad = input.cantidad,
        consumo_total = %open.total,
        "Consumption recorded"
    );

    Ok(ConsumptionRecorded {
        ok: true,
        consumo,
        consumo_total: open.total_f64(),
        items: open.items,
    })
}

/// Total and item count of the table's open ledger
pub async fn open_totals(
    executor: impl SqliteExecutor<'_>,
    table_id: i64,
) -> RepoResult<OpenLedger> {
    let entries = consumptions::find_open(executor, table_id).await?;
    Ok(entries
        .iter()
        .fold(OpenLedger::default(), |acc, entry| OpenLedger {
            total: acc.total + to_decimal(entry.precio) * Decimal::from(entry.cantidad),
            items: acc.items + entry.cantidad,
        }))
}

/// Open ledger total, rounded to 2 places
pub async fn total_for(pool: &SqlitePool, table_id: i64) -> RepoResult<f64> {
    Ok(open_totals(pool, table_id).await?.total_f64())
}

pub async fn item_count_for(pool: &SqlitePool, table_id: i64) -> RepoResult<i64> {
    Ok(open_totals(pool, table_id).await?.items)
}

/// Fold the open ledger into a ticket, leaving the table's ledger empty
///
/// Only checkout calls this, inside its transaction, after inserting the ticket.
pub(crate) async fn clear(
    executor: impl SqliteExecutor<'_>,
    table_id: i64,
    ticket_id: i64,
) -> RepoResult<u64> {
    consumptions::attach_open_to_ticket(executor, table_id, ticket_id).await
}
