//! Daily Report Model (reporte del día)

use serde::{Deserialize, Serialize};

/// Totals of today's tickets for one payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodSummary {
    pub metodo_pago: String,
    /// Number of tickets
    pub cantidad: i64,
    pub total_tiempo: f64,
    pub total_consumo: f64,
    pub total_cobrado: f64,
    pub total: f64,
}

/// Totals across all payment methods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub cantidad: i64,
    pub total_tiempo: f64,
    pub total_consumo: f64,
    pub total_cobrado: f64,
    pub total: f64,
}

/// Response of `GET /reporte`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    /// Business date (YYYY-MM-DD, server local time)
    pub fecha: String,
    pub sucursal_id: i64,
    pub por_metodo: Vec<PaymentMethodSummary>,
    pub totales: ReportTotals,
}
