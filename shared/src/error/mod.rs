//! Errors shared by the server and its clients
//!
//! Each failure is an [`AppError`] tagged with a numeric [`ErrorCode`]. The
//! code fixes the HTTP status and an [`ErrorCategory`]; the error renders
//! as an [`ErrorBody`].
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::MenuNotFound);
//! assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::validation("price must be positive").with_detail("field", "price");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
