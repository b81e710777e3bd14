pub mod dto;
pub mod handlers;

pub use dto::{CreatePackageRequest, PackageResponse, UpdatePackageRequest};
