//! Consumption Model (consumo)

use serde::{Deserialize, Serialize};

/// One recorded consumption entry
///
/// Entries are append-only. `ticket_id` stays empty while the entry belongs
/// to the table's open ledger and is set when a checkout folds it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Consumption {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub mesa_id: i64,
    pub producto_id: i64,
    pub cantidad: i64,
    /// Unit price at the time of sale
    pub precio: f64,
    #[serde(with = "super::serde_helpers::millis_rfc3339")]
    pub created_at: i64,
}

/// Record consumption payload (`POST /consumos`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionCreate {
    /// Accepted for compatibility; new entries always join the open ledger
    #[serde(default)]
    pub ticket_id: Option<i64>,
    pub mesa_id: i64,
    pub producto_id: i64,
    pub cantidad: i64,
}

/// Response of `POST /consumos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionRecorded {
    pub ok: bool,
    pub consumo: Consumption,
    /// Running total of the table's open ledger
    pub consumo_total: f64,
    /// Item count of the table's open ledger
    pub items: i64,
}
