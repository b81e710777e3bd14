//! Dependency entity - junction between repositories and packages

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::infrastructure::database::repositories::CrudEntityDef;

/// Dependency classification
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DependencyType {
    /// Runtime dependency
    #[sea_orm(string_value = "DIRECT")]
    Direct,
    /// Development-only dependency
    #[sea_orm(string_value = "DEV")]
    Dev,
    /// Optional dependency
    #[sea_orm(string_value = "OPTIONAL")]
    Optional,
    /// Peer dependency
    #[sea_orm(string_value = "PEER")]
    Peer,
}

impl std::fmt::Display for DependencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "DIRECT"),
            Self::Dev => write!(f, "DEV"),
            Self::Optional => write!(f, "OPTIONAL"),
            Self::Peer => write!(f, "PEER"),
        }
    }
}

/// Dependency model - one edge from a repository to a package it depends
/// on. `(repository_id, package_id)` is unique. Junction rows are removed
/// physically, so this entity has no soft-delete column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dependencies")]
pub struct Model {
    /// Unique dependency ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Depending repository
    pub repository_id: Uuid,

    /// Package being depended on
    pub package_id: Uuid,

    /// Version requirement string
    pub version: Option<String>,

    /// Dependency classification
    pub dependency_type: Option<DependencyType>,

    /// When the dependency was detected
    pub detected_at: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::repository::Entity",
        from = "Column::RepositoryId",
        to = "super::repository::Column::Id",
        on_delete = "Cascade"
    )]
    Repository,
    #[sea_orm(
        belongs_to = "super::package::Entity",
        from = "Column::PackageId",
        to = "super::package::Column::Id",
        on_delete = "Cascade"
    )]
    Package,
}

impl Related<super::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repository.def()
    }
}

impl Related<super::package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Package.def()
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
            if self.detected_at.is_not_set() {
                self.detected_at = Set(now);
            }
            self.created_at = Set(now);
            self.updated_at = Set(now);
        }
        Ok(self)
    }
}

impl CrudEntityDef for Entity {
    const NAME: &'static str = "dependency";

    fn id_column() -> Column {
        Column::Id
    }

    fn created_at_column() -> Option<Column> {
        Some(Column::CreatedAt)
    }

    fn updated_at_column() -> Option<Column> {
        Some(Column::UpdatedAt)
    }

    // No deleted_at: dependency edges are hard-deleted.
}
