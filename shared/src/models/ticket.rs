//! Ticket Model

use serde::{Deserialize, Serialize};

/// Payment method used when the request leaves it out
pub const DEFAULT_PAYMENT_METHOD: &str = "efectivo";

/// Immutable closing record of one table session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ticket {
    pub id: i64,
    pub sucursal_id: i64,
    pub mesa_id: i64,
    /// Billed minutes (after minimum and fraction rounding)
    pub minutos_fact: i64,
    pub importe_tiempo: f64,
    pub consumo_total: f64,
    pub total: f64,
    pub metodo_pago: String,
    pub efectivo_recibido: f64,
    #[serde(with = "super::serde_helpers::millis_rfc3339")]
    pub created_at: i64,
}

/// Checkout payload (`POST /tickets/cerrar`)
///
/// Every amount is optional; omitted values are computed by the server from
/// the stored session start and the table's open ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloseTicketRequest {
    #[serde(default)]
    pub sucursal_id: Option<i64>,
    pub mesa_id: i64,
    #[serde(default)]
    pub minutos_fact: Option<i64>,
    #[serde(default)]
    pub importe_tiempo: Option<f64>,
    #[serde(default)]
    pub consumo_total: Option<f64>,
    #[serde(default)]
    pub metodo_pago: Option<String>,
    #[serde(default)]
    pub efectivo_recibido: Option<f64>,
}

/// Response of `POST /tickets/cerrar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseTicketResponse {
    pub ok: bool,
    pub ticket: Ticket,
}

/// Response of `GET /tickets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketHistory {
    /// Business date (YYYY-MM-DD, server local time)
    pub fecha: String,
    pub sucursal_id: i64,
    pub tickets: Vec<Ticket>,
}
