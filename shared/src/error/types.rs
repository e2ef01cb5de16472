//! [`AppError`] and the JSON body it renders to

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by every handler.
///
/// Store, token and validation failures are all converted into this before
/// they reach a response.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    /// Sent to the client as `error`
    pub message: String,
    /// Extra context such as per-field validation messages
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    fn build(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
        }
    }

    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::build(code, code.message().to_owned())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, message.into())
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        details.insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    fn missing(code: ErrorCode, resource: String) -> Self {
        Self::build(code, format!("{resource} not found")).with_detail("resource", resource)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Generic not found; handlers use the per-entity codes instead
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::missing(ErrorCode::NotFound, resource.into())
    }

    /// `"<resource> not found"` for a dangling menu, table, order or food id
    pub fn reference(resource: impl Into<String>) -> Self {
        Self::missing(ErrorCode::ReferenceNotFound, resource.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    pub fn malformed_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenMalformed, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TimeoutError, msg)
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Wire form: `{"error": "<message>", "code": <u16>, "details": {..}}`,
/// with `details` omitted when empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
            code: err.code.into(),
            details: err.details.clone(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "Request failed with a system error");
        }
        (self.http_status(), Json(ErrorBody::from(&self))).into_response()
    }
}
