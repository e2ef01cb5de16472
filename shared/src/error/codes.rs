//! Numeric error codes carried in every error body
//!
//! The thousands digit names the area a code belongs to: `0` general,
//! `1` auth, `3` menus, `4` orders and order items, `5` invoices, `6` foods,
//! `7` tables, `8` users, `9` system. `2xxx` is unused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable error identifier, written as a bare integer in JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,
    /// A create or update names a menu, table, order or food that is not stored
    ReferenceNotFound = 6,

    /// The `token` header is absent
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    /// Signature mismatch
    TokenInvalid = 1004,
    /// Not decodable as a JWT
    TokenMalformed = 1005,

    MenuNotFound = 3001,
    /// Menu start/end dates are not both in the future and ordered
    InvalidTimeWindow = 3002,

    OrderNotFound = 4001,
    OrderItemNotFound = 4002,
    /// Billing an order that has no items
    NoItemsForOrder = 4003,

    InvoiceNotFound = 5001,

    FoodNotFound = 6001,

    TableNotFound = 7001,

    UserNotFound = 8001,

    InternalError = 9001,
    DatabaseError = 9002,
    TimeoutError = 9003,
    ConfigError = 9004,
}

impl ErrorCode {
    /// Every defined code, ascending
    pub const ALL: [ErrorCode; 25] = [
        Self::Success,
        Self::Unknown,
        Self::ValidationFailed,
        Self::NotFound,
        Self::AlreadyExists,
        Self::InvalidRequest,
        Self::ReferenceNotFound,
        Self::NotAuthenticated,
        Self::InvalidCredentials,
        Self::TokenExpired,
        Self::TokenInvalid,
        Self::TokenMalformed,
        Self::MenuNotFound,
        Self::InvalidTimeWindow,
        Self::OrderNotFound,
        Self::OrderItemNotFound,
        Self::NoItemsForOrder,
        Self::InvoiceNotFound,
        Self::FoodNotFound,
        Self::TableNotFound,
        Self::UserNotFound,
        Self::InternalError,
        Self::DatabaseError,
        Self::TimeoutError,
        Self::ConfigError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Text used when an error is raised without its own message
    pub const fn message(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            Success => "Operation completed successfully",
            Unknown => "An unknown error occurred",
            ValidationFailed => "Validation failed",
            NotFound => "Resource not found",
            AlreadyExists => "Resource already exists",
            InvalidRequest => "Invalid request",
            ReferenceNotFound => "Related resource not found",
            NotAuthenticated => "No Authorization Header Provided",
            InvalidCredentials => "Invalid email or password",
            TokenExpired => "Authentication token has expired",
            TokenInvalid => "Authentication token is invalid",
            TokenMalformed => "Authentication token is malformed",
            MenuNotFound => "Menu not found",
            InvalidTimeWindow => "kindly retype the time",
            OrderNotFound => "Order not found",
            OrderItemNotFound => "Order item not found",
            NoItemsForOrder => "Order has no items",
            InvoiceNotFound => "Invoice not found",
            FoodNotFound => "Food not found",
            TableNotFound => "Table not found",
            UserNotFound => "User not found",
            InternalError => "Internal server error",
            DatabaseError => "Database error",
            TimeoutError => "Operation timed out",
            ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that no [`ErrorCode`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}
