// ABOUTME: Offset pagination arithmetic shared by the recipe listing and search paths
// ABOUTME: Normalizes page/limit to their defaults and carries paged results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};

/// Requested page as received from the caller
///
/// Values below 1 (or absent) fall back to page 1 and limit 10 when the
/// effective values are computed; the raw values are kept so responses can
/// echo what the caller sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Requested page, 1-based
    pub page: Option<i64>,
    /// Requested page size
    pub limit: Option<i64>,
}

impl PageRequest {
    /// Create a page request from optional raw values
    #[must_use]
    pub const fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self { page, limit }
    }

    /// Page actually used for the query
    #[must_use]
    pub fn effective_page(&self) -> i64 {
        self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE)
    }

    /// Page size actually used for the query
    #[must_use]
    pub fn effective_limit(&self) -> i64 {
        self.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT)
    }

    /// Rows skipped before the requested page
    ///
    /// Saturates instead of overflowing for absurd page numbers; such an offset
    /// simply lands beyond the last row.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.effective_page() - 1).saturating_mul(self.effective_limit())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(Some(DEFAULT_PAGE), Some(DEFAULT_LIMIT))
    }
}

/// One page of rows plus the page-independent match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Number of rows matching the filter across all pages
    pub total: i64,
    /// Rows of the requested page, possibly empty
    pub data: Vec<T>,
}

impl<T> PagedResult<T> {
    /// Create a paged result
    #[must_use]
    pub const fn new(total: i64, data: Vec<T>) -> Self {
        Self { total, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let request = PageRequest::new(None, None);
        assert_eq!(request.effective_page(), 1);
        assert_eq!(request.effective_limit(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_values_below_one_fall_back() {
        let request = PageRequest::new(Some(0), Some(-5));
        assert_eq!(request.effective_page(), 1);
        assert_eq!(request.effective_limit(), 10);

        let request = PageRequest::new(Some(-3), Some(0));
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_offset_arithmetic() {
        assert_eq!(PageRequest::new(Some(2), Some(5)).offset(), 5);
        assert_eq!(PageRequest::new(Some(3), Some(20)).offset(), 40);
        assert_eq!(PageRequest::new(Some(1), Some(1)).offset(), 0);
    }

    #[test]
    fn test_offset_saturates() {
        let request = PageRequest::new(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(request.offset(), i64::MAX);
    }
}
