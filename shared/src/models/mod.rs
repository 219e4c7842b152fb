//! Data models
//!
//! Shared between billar-server and the operator front end (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); timestamps are Unix millis
//! serialized as RFC 3339. Field names on the wire are the Spanish names the
//! front end already uses.

pub mod consumption;
pub mod dining_table;
pub mod product;
pub mod rate;
pub mod report;
pub mod serde_helpers;
pub mod ticket;

// Re-exports
pub use consumption::*;
pub use dining_table::*;
pub use product::*;
pub use rate::*;
pub use report::*;
pub use ticket::*;
