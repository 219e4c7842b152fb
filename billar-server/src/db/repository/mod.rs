//! Repository Module
//!
//! Plain query functions over the SQLite schema. Functions that must run
//! inside the checkout transaction take any `SqliteExecutor`, so they work
//! with both the pool and `&mut *tx`.

pub mod branches;
pub mod consumptions;
pub mod products;
pub mod rates;
pub mod tables;
pub mod tickets;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, sqlx::Error>;
