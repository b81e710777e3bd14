//! Pagination query parameters and response page envelope

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{PaginatedResult, PaginationParams, RepositoryResult, DEFAULT_PAGE_SIZE};

/// Offset/limit query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PageQuery {
    /// Number of items to skip. Default: 0
    #[serde(default)]
    pub offset: i64,
    /// Number of items to return (1-100). Default: 50
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Include soft-deleted records. Default: false
    #[serde(default)]
    pub include_deleted: bool,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl PageQuery {
    /// Validate into repository pagination params. Out-of-range values are
    /// rejected with `InvalidArgument`, not clamped.
    pub fn params(&self) -> RepositoryResult<PaginationParams> {
        PaginationParams::new(self.offset, self.limit)
    }
}

/// Paginated response
///
/// Holds one slice of the data plus page metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    /// Number of items skipped
    pub offset: u64,
    /// Page size
    pub limit: u64,
    /// Current page (1-based)
    pub page: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Whether pages exist after this one
    pub has_next: bool,
    /// Whether pages exist before this one
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<M>(result: PaginatedResult<M>) -> Self
    where
        M: Into<T>,
    {
        Self {
            total: result.total,
            offset: result.offset,
            limit: result.limit,
            page: result.page(),
            total_pages: result.total_pages(),
            has_next: result.has_next(),
            has_prev: result.has_prev(),
            items: result.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RepositoryError;

    #[test]
    fn defaults_apply_when_query_is_empty() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE as i64);
        assert!(!q.include_deleted);
        assert!(q.params().is_ok());
    }

    #[test]
    fn out_of_range_limit_is_invalid_argument() {
        let q: PageQuery = serde_json::from_str(r#"{"limit": 101}"#).unwrap();
        assert!(matches!(
            q.params().unwrap_err(),
            RepositoryError::InvalidArgument(_)
        ));
    }

    #[test]
    fn response_carries_page_metadata() {
        let params = PaginationParams::new(2, 2).unwrap();
        let result = PaginatedResult::new(vec![3u32, 4u32], 5, params);
        let resp: PaginatedResponse<u32> = PaginatedResponse::from_result(result);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.has_next);
        assert!(resp.has_prev);
    }
}
