//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_organizations;
mod m20260101_000002_create_repositories;
mod m20260101_000003_create_packages;
mod m20260101_000004_create_dependencies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_organizations::Migration),
            Box::new(m20260101_000002_create_repositories::Migration),
            Box::new(m20260101_000003_create_packages::Migration),
            Box::new(m20260101_000004_create_dependencies::Migration),
        ]
    }
}
