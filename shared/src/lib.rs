//! Shared types for the billiard POS
//!
//! Wire models and the unified error system used by billar-server and its
//! integration tests.

pub mod error;
pub mod models;
pub mod util;
