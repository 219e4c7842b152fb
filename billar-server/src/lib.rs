//! billar-server — billiard hall point of sale
//!
//! - Tracks table sessions and bills elapsed time by rate fractions
//! - Keeps a per-table consumption ledger
//! - Closes a table into an immutable ticket in one transaction
//! - Serves the JSON API and the operator front end

pub mod api;
pub mod billing;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod money;
pub mod services;
pub mod state;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
