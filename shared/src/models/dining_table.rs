//! Dining Table Model (mesa)

use serde::{Deserialize, Serialize};

/// Occupancy state of a table
///
/// Stored as the literal `libre` / `ocupada` strings the front end expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum TableStatus {
    #[serde(rename = "libre")]
    #[cfg_attr(feature = "db", sqlx(rename = "libre"))]
    Free,
    #[serde(rename = "ocupada")]
    #[cfg_attr(feature = "db", sqlx(rename = "ocupada"))]
    Occupied,
}

/// Dining table entity
///
/// `started_at` is set exactly when `status` is `Occupied`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub status: TableStatus,
    /// Session start (Unix millis)
    #[serde(rename = "inicio", with = "super::serde_helpers::millis_rfc3339_option")]
    pub started_at: Option<i64>,
}

impl DiningTable {
    pub fn is_occupied(&self) -> bool {
        self.status == TableStatus::Occupied
    }
}

/// Response of `POST /mesas/{id}/iniciar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStarted {
    pub ok: bool,
    pub mesa: DiningTable,
    /// False when the table was already occupied and kept its original start
    #[serde(rename = "iniciada")]
    pub started: bool,
}

/// Live bill for an occupied table (`GET /mesas/{id}/cuenta`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillPreview {
    pub mesa_id: i64,
    #[serde(with = "super::serde_helpers::millis_rfc3339")]
    pub inicio: i64,
    /// Elapsed wall-clock minutes (fractional)
    pub minutos_transcurridos: f64,
    pub minutos_fact: i64,
    pub importe_tiempo: f64,
    pub consumo_total: f64,
    pub items: i64,
    pub total: f64,
}
