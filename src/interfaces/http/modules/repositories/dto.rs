//! Repository DTOs

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::infrastructure::database::entities::repository;

/// Repository details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RepositoryResponse {
    pub id: Uuid,
    pub name: String,
    pub organization_id: Uuid,
    pub github_url: String,
    pub stars: i32,
    pub last_commit_at: Option<DateTime<Utc>>,
    pub is_archived: bool,
    pub primary_language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<repository::Model> for RepositoryResponse {
    fn from(m: repository::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            organization_id: m.organization_id,
            github_url: m.github_url,
            stars: m.stars,
            last_commit_at: m.last_commit_at,
            is_archived: m.is_archived,
            primary_language: m.primary_language,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRepositoryRequest {
    #[validate(length(min = 1, max = 255, message = "repository name is required"))]
    pub name: String,
    pub organization_id: Uuid,
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: String,
    pub stars: Option<i32>,
    pub last_commit_at: Option<DateTime<Utc>>,
    pub is_archived: Option<bool>,
    pub primary_language: Option<String>,
}

impl CreateRepositoryRequest {
    pub fn into_active_model(self) -> repository::ActiveModel {
        repository::ActiveModel {
            name: Set(self.name),
            organization_id: Set(self.organization_id),
            github_url: Set(self.github_url),
            stars: Set(self.stars.unwrap_or(0)),
            last_commit_at: Set(self.last_commit_at),
            is_archived: Set(self.is_archived.unwrap_or(false)),
            primary_language: Set(self.primary_language),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRepositoryRequest {
    #[validate(length(min = 1, max = 255, message = "repository name must not be empty"))]
    pub name: Option<String>,
    pub organization_id: Option<Uuid>,
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: Option<String>,
    pub stars: Option<i32>,
    pub last_commit_at: Option<DateTime<Utc>>,
    pub is_archived: Option<bool>,
    pub primary_language: Option<String>,
}

impl UpdateRepositoryRequest {
    /// Build a patch: absent fields stay `NotSet` and keep their stored
    /// values.
    pub fn into_patch(self) -> repository::ActiveModel {
        let mut patch = repository::ActiveModel::default();
        if let Some(name) = self.name {
            patch.name = Set(name);
        }
        if let Some(org_id) = self.organization_id {
            patch.organization_id = Set(org_id);
        }
        if let Some(url) = self.github_url {
            patch.github_url = Set(url);
        }
        if let Some(stars) = self.stars {
            patch.stars = Set(stars);
        }
        if let Some(ts) = self.last_commit_at {
            patch.last_commit_at = Set(Some(ts));
        }
        if let Some(archived) = self.is_archived {
            patch.is_archived = Set(archived);
        }
        if let Some(lang) = self.primary_language {
            patch.primary_language = Set(Some(lang));
        }
        patch
    }
}
