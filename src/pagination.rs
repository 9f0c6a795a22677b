//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated list endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct PaginationQuery {
    /// Maximum number of items to return (default: 50, max: 100)
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    #[serde(default)]
    pub offset: Option<i64>,
}

impl PaginationQuery {
    /// Get the limit, clamped to valid range
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }

    /// Get the offset, minimum 0
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Paginated response wrapper for list endpoints.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of items (across all pages)
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }
}
