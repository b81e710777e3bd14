pub mod dto;
pub mod handlers;

pub use dto::{CreateRepositoryRequest, RepositoryResponse, UpdateRepositoryRequest};
