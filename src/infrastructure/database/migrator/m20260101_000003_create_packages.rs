//! Create packages table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::Name).string().not_null())
                    .col(ColumnDef::new(Packages::Ecosystem).string().not_null())
                    .col(ColumnDef::new(Packages::Description).text())
                    .col(ColumnDef::new(Packages::RepositoryUrl).string())
                    .col(ColumnDef::new(Packages::HomepageUrl).string())
                    .col(ColumnDef::new(Packages::LatestVersion).string())
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Packages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Packages::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create unique index on name + ecosystem
        manager
            .create_index(
                Index::create()
                    .name("idx_packages_name_ecosystem")
                    .table(Packages::Table)
                    .col(Packages::Name)
                    .col(Packages::Ecosystem)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Packages {
    Table,
    Id,
    Name,
    Ecosystem,
    Description,
    RepositoryUrl,
    HomepageUrl,
    LatestVersion,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
