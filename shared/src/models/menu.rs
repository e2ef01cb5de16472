//! Menu Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Menu entity
///
/// `start_date`/`end_date` bound the window in which the menu is offered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub menu_id: String,
    pub name: String,
    pub category: String,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_menu_window"))]
pub struct MenuCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
}

/// Update menu payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
}

fn validate_menu_window(menu: &MenuCreate) -> Result<(), ValidationError> {
    match (menu.start_date, menu.end_date) {
        (Some(start), Some(end)) if end <= start => {
            let mut err = ValidationError::new("menu_window");
            err.message = Some("end_date must be after start_date".into());
            Err(err)
        }
        _ => Ok(()),
    }
}
