//! Organization entity - a GitHub organization or user

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::infrastructure::database::repositories::CrudEntityDef;

/// Organization model - a GitHub organization or user that owns repositories
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Unique organization ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Organization name (GitHub handle), unique
    #[sea_orm(unique)]
    pub name: String,

    /// GitHub organization URL
    pub github_url: Option<String>,

    /// Organization website URL
    pub website_url: Option<String>,

    /// Organization description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// GitHub Sponsors or other sponsorship URL
    pub sponsorship_url: Option<String>,

    /// Count of repositories
    pub total_repositories: i32,

    /// Sum of stars across all repositories
    pub total_stars: i32,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,

    /// Soft delete marker. None if the record is live
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::repository::Entity")]
    Repository,
}

impl Related<super::repository::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repository.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Assign the generated id and timestamps on insert, the way the
    /// database would with server defaults.
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
    const NAME: &'static str = "organization";

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
