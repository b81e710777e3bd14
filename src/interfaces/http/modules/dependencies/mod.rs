pub mod dto;
pub mod handlers;

pub use dto::{CreateDependencyRequest, DependencyResponse, UpdateDependencyRequest};
