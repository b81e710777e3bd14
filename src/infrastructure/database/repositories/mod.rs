//! Repository layer
//!
//! `Repository<E>` provides uniform CRUD, soft delete, pagination and
//! transaction control for any entity implementing `CrudEntityDef`.
//! Entity-specific repositories compose it and add custom queries
//! (see `OrganizationRepository`).

pub mod base;
pub mod organization_repository;
pub mod uow;

pub use base::{CrudEntityDef, Repository};
pub use organization_repository::OrganizationRepository;
pub use uow::UnitOfWork;
