//! Rate Configuration Model (tarifa por sucursal)

use serde::{Deserialize, Serialize};

/// Branch rate configuration as stored and served by `GET /tarifas`
///
/// Values are not validated here; the billing calculator rejects an unusable
/// configuration when it is turned into a rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RateConfig {
    #[serde(rename = "sucursal_id")]
    pub branch_id: i64,
    /// Currency per hour (Bs)
    #[serde(rename = "price_per_hour_bs")]
    pub price_per_hour: f64,
    /// Billing block size in minutes
    pub fraction_minutes: i64,
    /// Minimum billable minutes
    #[serde(rename = "min_minutes")]
    pub minimum_minutes: i64,
    #[serde(with = "super::serde_helpers::millis_rfc3339")]
    pub updated_at: i64,
}
