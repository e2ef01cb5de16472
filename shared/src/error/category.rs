//! Coarse grouping of error codes by their thousands digit

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Menu,
    Order,
    Invoice,
    Food,
    Table,
    User,
    /// Failures of the service itself rather than of the request
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 | 2 => Self::Auth,
            3 => Self::Menu,
            4 => Self::Order,
            5 => Self::Invoice,
            6 => Self::Food,
            7 => Self::Table,
            8 => Self::User,
            _ => Self::System,
        }
    }

    /// Lowercase label, as used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Menu => "menu",
            Self::Order => "order",
            Self::Invoice => "invoice",
            Self::Food => "food",
            Self::Table => "table",
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
