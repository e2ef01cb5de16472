//! Status line for each error code

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Status sent with this code. Auth codes are 401, system codes and
    /// `Unknown` are 500, dangling references and empty bills are 422.
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            Success => StatusCode::OK,
            ValidationFailed | InvalidRequest | InvalidTimeWindow => StatusCode::BAD_REQUEST,
            AlreadyExists => StatusCode::CONFLICT,
            ReferenceNotFound | NoItemsForOrder => StatusCode::UNPROCESSABLE_ENTITY,
            NotFound | MenuNotFound | OrderNotFound | OrderItemNotFound | InvoiceNotFound
            | FoodNotFound | TableNotFound | UserNotFound => StatusCode::NOT_FOUND,
            _ if self.category() == ErrorCategory::Auth => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
