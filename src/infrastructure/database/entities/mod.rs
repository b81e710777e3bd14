//! SeaORM entities
//!
//! Each entity declares its repository capabilities (primary key, timestamp
//! and soft-delete columns) through a `CrudEntityDef` impl next to the
//! model, so the generic repository resolves them at compile time.

pub mod dependency;
pub mod organization;
pub mod package;
pub mod repository;
