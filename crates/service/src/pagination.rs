//! Pagination utilities for service layer
//!
//! Offset pagination as received from the query string. Out-of-range values
//! are clamped, never rejected.

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Raw pagination parameters
#[derive(Clone, Copy, Debug, Default)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit: Some(limit), offset: Some(offset) }
    }

    /// Clamp to `1..=MAX_LIMIT` and a non-negative offset; returns `(limit, offset)`.
    pub fn normalize(self) -> (u64, u64) {
        let limit = match self.limit {
            None => DEFAULT_LIMIT,
            Some(l) => l.clamp(1, MAX_LIMIT as i64) as u64,
        };
        let offset = self.offset.unwrap_or(0).max(0) as u64;
        (limit, offset)
    }
}
