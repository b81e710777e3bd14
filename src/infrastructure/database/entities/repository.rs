//! Repository entity - a GitHub repository within an organization

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::infrastructure::database::repositories::CrudEntityDef;

/// Repository model - a GitHub repository owned by an organization
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "repositories")]
pub struct Model {
    /// Unique repository ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Repository name
    pub name: String,

    /// Owning organization
    pub organization_id: Uuid,

    /// GitHub repository URL, unique
    #[sea_orm(unique)]
    pub github_url: String,

    /// Number of stars
    pub stars: i32,

    /// Timestamp of the last commit, if known
    pub last_commit_at: Option<DateTime<Utc>>,

    /// Whether the repository is archived
    pub is_archived: bool,

    /// Primary programming language
    pub primary_language: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft delete marker. None if the record is live
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_delete = "Cascade"
    )]
    Organization,
    #[sea_orm(has_many = "super::dependency::Entity")]
    Dependency,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
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
    const NAME: &'static str = "repository";

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
