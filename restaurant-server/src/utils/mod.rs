//! Utilities
//!
//! - [`AppError`] / [`AppResult`]: error types (from `shared::error`)
//! - [`ValidatedJson`]: validating JSON extractor
//! - [`PaginationParams`]: list pagination
//! - logging setup

pub mod error;
pub mod extract;
pub mod logger;
pub mod types;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, validation_error};
pub use extract::ValidatedJson;
pub use types::{ListQuery, PaginationParams};
