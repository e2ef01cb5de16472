//! Shared Types
//!
//! Common types used across the application

use serde::Deserialize;

/// Largest page a client may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination query parameters (`?page=2&page_size=20`)
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationParams {
    /// Number of records to skip
    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Page size, clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Optional pagination on list endpoints; no query means "everything"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub fn pagination(&self) -> Option<PaginationParams> {
        if self.page.is_none() && self.page_size.is_none() {
            return None;
        }
        Some(PaginationParams {
            page: self.page.unwrap_or_else(default_page),
            page_size: self.page_size.unwrap_or_else(default_page_size),
        })
    }
}
