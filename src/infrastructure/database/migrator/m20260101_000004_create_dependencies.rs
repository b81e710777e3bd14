//! Create dependencies table

use sea_orm_migration::prelude::*;

use super::m20260101_000002_create_repositories::Repositories;
use super::m20260101_000003_create_packages::Packages;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dependencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dependencies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Dependencies::RepositoryId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Dependencies::PackageId).uuid().not_null())
                    .col(ColumnDef::new(Dependencies::Version).string())
                    .col(ColumnDef::new(Dependencies::DependencyType).string_len(20))
                    .col(
                        ColumnDef::new(Dependencies::DetectedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Dependencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Dependencies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dependencies_repository")
                            .from(Dependencies::Table, Dependencies::RepositoryId)
                            .to(Repositories::Table, Repositories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dependencies_package")
                            .from(Dependencies::Table, Dependencies::PackageId)
                            .to(Packages::Table, Packages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on repository_id + package_id
        manager
            .create_index(
                Index::create()
                    .name("idx_dependencies_repository_package")
                    .table(Dependencies::Table)
                    .col(Dependencies::RepositoryId)
                    .col(Dependencies::PackageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dependencies_package_id")
                    .table(Dependencies::Table)
                    .col(Dependencies::PackageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dependencies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Dependencies {
    Table,
    Id,
    RepositoryId,
    PackageId,
    Version,
    DependencyType,
    DetectedAt,
    CreatedAt,
    UpdatedAt,
}
