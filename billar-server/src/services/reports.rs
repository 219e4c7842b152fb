//! Daily ticket history and payment-method report
//!
//! "Today" is the server's local calendar day. Sums are done in `Decimal`.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{DailyReport, PaymentMethodSummary, ReportTotals, Ticket, TicketHistory};
use sqlx::SqlitePool;

use super::require_branch;
use crate::db::repository::tickets;
use crate::error::ServiceResult;
use crate::money::{to_decimal, to_f64};

/// Current business date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `[start, end)` of a local calendar day in Unix millis
pub fn day_window(date: NaiveDate) -> Option<(i64, i64)> {
    let start_of = |d: NaiveDate| {
        Local
            .from_local_datetime(&d.and_hms_opt(0, 0, 0)?)
            .earliest()
            .map(|dt| dt.timestamp_millis())
    };
    Some((start_of(date)?, start_of(date.succ_opt()?)?))
}

async fn tickets_on(
    pool: &SqlitePool,
    branch_id: i64,
    date: NaiveDate,
) -> ServiceResult<Vec<Ticket>> {
    require_branch(pool, branch_id).await?;
    let (from, to) = day_window(date)
        .ok_or_else(|| AppError::internal(format!("Cannot resolve local day {date}")))?;
    Ok(tickets::find_between(pool, branch_id, from, to).await?)
}

/// Branch tickets of the given day, newest first
pub async fn history(
    pool: &SqlitePool,
    branch_id: i64,
    date: NaiveDate,
) -> ServiceResult<TicketHistory> {
    let tickets = tickets_on(pool, branch_id, date).await?;
    Ok(TicketHistory {
        fecha: date.to_string(),
        sucursal_id: branch_id,
        tickets,
    })
}

/// Branch totals of the given day grouped by payment method
pub async fn daily(
    pool: &SqlitePool,
    branch_id: i64,
    date: NaiveDate,
) -> ServiceResult<DailyReport> {
    let tickets = tickets_on(pool, branch_id, date).await?;
    let (por_metodo, totales) = summarize(&tickets);
    Ok(DailyReport {
        fecha: date.to_string(),
        sucursal_id: branch_id,
        por_metodo,
        totales,
    })
}

#[derive(Default)]
struct Sums {
    count: i64,
    time: Decimal,
    consumption: Decimal,
    received: Decimal,
    total: Decimal,
}

impl Sums {
    fn add(&mut self, t: &Ticket) {
        self.count += 1;
        self.time += to_decimal(t.importe_tiempo);
        self.consumption += to_decimal(t.consumo_total);
        self.received += to_decimal(t.efectivo_recibido);
        self.total += to_decimal(t.total);
    }
}

/// Group tickets by payment method (alphabetical) and total them
pub fn summarize(tickets: &[Ticket]) -> (Vec<PaymentMethodSummary>, ReportTotals) {
    let mut by_method: BTreeMap<&str, Sums> = BTreeMap::new();
    let mut all = Sums::default();

    for t in tickets {
        by_method.entry(t.metodo_pago.as_str()).or_default().add(t);
        all.add(t);
    }

    let rows = by_method
        .into_iter()
        .map(|(method, s)| PaymentMethodSummary {
            metodo_pago: method.to_string(),
            cantidad: s.count,
            total_tiempo: to_f64(s.time),
            total_consumo: to_f64(s.consumption),
            total_cobrado: to_f64(s.received),
            total: to_f64(s.total),
        })
        .collect();

    let totals = ReportTotals {
        cantidad: all.count,
        total_tiempo: to_f64(all.time),
        total_consumo: to_f64(all.consumption),
        total_cobrado: to_f64(all.received),
        total: to_f64(all.total),
    };

    (rows, totals)
}
