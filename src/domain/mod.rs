//! Core domain types shared by the repository and HTTP layers

pub mod error;
pub mod pagination;

// Re-export commonly used types
pub use error::{RepositoryError, RepositoryResult};
pub use pagination::{PaginatedResult, PaginationParams, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
