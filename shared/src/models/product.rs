//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity (per branch catalog)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Current unit price
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}
