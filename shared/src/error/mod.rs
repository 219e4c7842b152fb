//! Unified error system for the billiard POS
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: JSON body sent to the operator front end
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Branch errors
//! - 2xxx: Table errors
//! - 3xxx: Product errors
//! - 4xxx: Payment errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableNotFound, "Table 12 not found")
//!     .with_detail("mesa_id", 12);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
