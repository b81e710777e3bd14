//! Shared HTTP plumbing

pub mod api_response;
pub mod error;
pub mod pagination;
pub mod validated_json;

pub use api_response::ApiResponse;
pub use error::ApiError;
pub use pagination::{PageQuery, PaginatedResponse};
pub use validated_json::ValidatedJson;
