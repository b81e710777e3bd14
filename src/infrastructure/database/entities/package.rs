//! Package entity - a software package from some ecosystem registry

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::infrastructure::database::repositories::CrudEntityDef;

/// Package model - a package (npm, crates.io, PyPI, ...) that repositories
/// depend on. `(name, ecosystem)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    /// Unique package ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Package name (e.g. "fastapi", "react")
    pub name: String,

    /// Package ecosystem (e.g. "npm", "pypi", "crates")
    pub ecosystem: String,

    /// Package description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Source code repository URL
    pub repository_url: Option<String>,

    /// Project homepage URL
    pub homepage_url: Option<String>,

    /// Latest version string
    pub latest_version: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft delete marker. None if the record is live
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dependency::Entity")]
    Dependency,
}

impl Related<super::dependency::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dependency.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let now = Utc::now();
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            self.created_at = Set(now);
            self.updated_at = Set(now);
        }
        Ok(self)
    }
}

impl CrudEntityDef for Entity {
    const NAME: &'static str = "package";

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Option<Column> {
        Some(Column::CreatedAt)
    }

    fn updated_at_column() -> Option<Column> {
        Some(Column::UpdatedAt)
    }

    fn deleted_at_column() -> Option<Column> {
        Some(Column::DeletedAt)
    }
}
