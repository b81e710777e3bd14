//! Offset/limit pagination value objects
//!
//! `PaginationParams` is a validated request; `PaginatedResult` is the page
//! plus the metadata needed for navigation controls. Both are plain values
//! with no I/O.

use crate::domain::error::{RepositoryError, RepositoryResult};

/// Hard cap on page size. Requests above this are rejected, not clamped.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Validated offset/limit pair for list operations.
///
/// Construction fails with `InvalidArgument` before any store access when
/// `offset < 0` or `limit` is outside `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    offset: u64,
    limit: u64,
}

impl PaginationParams {
    pub fn new(offset: i64, limit: i64) -> RepositoryResult<Self> {
        if offset < 0 {
            return Err(RepositoryError::invalid_argument(
                "offset must be non-negative",
            ));
        }
        if limit <= 0 || limit as u64 > MAX_PAGE_SIZE {
            return Err(RepositoryError::invalid_argument(format!(
                "limit out of range (1-{})",
                MAX_PAGE_SIZE
            )));
        }
        Ok(Self {
            offset: offset as u64,
            limit: limit as u64,
        })
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a result set plus the total count across all pages.
///
/// Navigation flags are derived on access so they can never fall out of
/// sync with `total`/`offset`/`limit`.
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: PaginationParams) -> Self {
        Self {
            items,
            total,
            offset: pagination.offset(),
            limit: pagination.limit(),
        }
    }

    /// Whether pages exist after this one.
    pub fn has_next(&self) -> bool {
        self.offset + self.limit < self.total
    }

    /// Whether pages exist before this one.
    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    /// Current page number, 1-based.
    pub fn page(&self) -> u64 {
        self.offset / self.limit + 1
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = PaginationParams::default();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn negative_offset_rejected() {
        let err = PaginationParams::new(-1, 10).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidArgument(_)));
        assert!(err.to_string().contains("offset must be non-negative"));
    }

    #[test]
    fn limit_bounds_enforced() {
        assert!(PaginationParams::new(0, 0).is_err());
        assert!(PaginationParams::new(0, -5).is_err());
        assert!(PaginationParams::new(0, MAX_PAGE_SIZE as i64 + 1).is_err());
        assert!(PaginationParams::new(0, 1).is_ok());
        assert!(PaginationParams::new(0, MAX_PAGE_SIZE as i64).is_ok());
    }

    #[test]
    fn navigation_flags() {
        let params = PaginationParams::new(0, 2).unwrap();
        let result = PaginatedResult::new(vec![1, 2], 5, params);
        assert!(result.has_next());
        assert!(!result.has_prev());

        let params = PaginationParams::new(4, 2).unwrap();
        let result = PaginatedResult::new(vec![5], 5, params);
        assert!(!result.has_next());
        assert!(result.has_prev());
    }

    #[test]
    fn page_math() {
        let params = PaginationParams::new(4, 2).unwrap();
        let result = PaginatedResult::new(vec![5], 5, params);
        assert_eq!(result.page(), 3);
        assert_eq!(result.total_pages(), 3);

        let params = PaginationParams::new(0, 2).unwrap();
        let empty: PaginatedResult<i32> = PaginatedResult::new(vec![], 0, params);
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn exact_page_boundary_has_no_next() {
        let params = PaginationParams::new(2, 2).unwrap();
        let result = PaginatedResult::new(vec![3, 4], 4, params);
        assert!(!result.has_next());
        assert!(result.has_prev());
    }
}
