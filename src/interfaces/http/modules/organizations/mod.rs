pub mod dto;
pub mod handlers;

pub use dto::{CreateOrganizationRequest, OrganizationResponse, UpdateOrganizationRequest};
