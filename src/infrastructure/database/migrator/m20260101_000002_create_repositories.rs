//! Create repositories table

use sea_orm_migration::prelude::*;

use super::m20260101_000001_create_organizations::Organizations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Repositories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Repositories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Repositories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Repositories::OrganizationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Repositories::GithubUrl).string().not_null())
                    .col(
                        ColumnDef::new(Repositories::Stars)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Repositories::LastCommitAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Repositories::IsArchived)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Repositories::PrimaryLanguage).string())
                    .col(
                        ColumnDef::new(Repositories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Repositories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Repositories::DeletedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_repositories_organization")
                            .from(Repositories::Table, Repositories::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create unique index on github_url
        manager
            .create_index(
                Index::create()
                    .name("idx_repositories_github_url")
                    .table(Repositories::Table)
                    .col(Repositories::GithubUrl)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repositories_organization_id")
                    .table(Repositories::Table)
                    .col(Repositories::OrganizationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_repositories_stars")
                    .table(Repositories::Table)
                    .col(Repositories::Stars)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Repositories::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Repositories {
    Table,
    Id,
    Name,
    OrganizationId,
    GithubUrl,
    Stars,
    LastCommitAt,
    IsArchived,
    PrimaryLanguage,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
