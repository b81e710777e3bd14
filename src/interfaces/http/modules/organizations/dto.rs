//! Organization DTOs

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::infrastructure::database::entities::organization;

/// Organization details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub sponsorship_url: Option<String>,
    pub total_repositories: i32,
    pub total_stars: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<organization::Model> for OrganizationResponse {
    fn from(m: organization::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            github_url: m.github_url,
            website_url: m.website_url,
            description: m.description,
            sponsorship_url: m.sponsorship_url,
            total_repositories: m.total_repositories,
            total_stars: m.total_stars,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 255, message = "organization name is required"))]
    pub name: String,
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: Option<String>,
    #[validate(url(message = "website_url must be a valid URL"))]
    pub website_url: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "sponsorship_url must be a valid URL"))]
    pub sponsorship_url: Option<String>,
    pub total_repositories: Option<i32>,
    pub total_stars: Option<i32>,
}

impl CreateOrganizationRequest {
    pub fn into_active_model(self) -> organization::ActiveModel {
        organization::ActiveModel {
            name: Set(self.name),
            github_url: Set(self.github_url),
            website_url: Set(self.website_url),
            description: Set(self.description),
            sponsorship_url: Set(self.sponsorship_url),
            total_repositories: Set(self.total_repositories.unwrap_or(0)),
            total_stars: Set(self.total_stars.unwrap_or(0)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateOrganizationRequest {
    #[validate(length(min = 1, max = 255, message = "organization name must not be empty"))]
    pub name: Option<String>,
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: Option<String>,
    #[validate(url(message = "website_url must be a valid URL"))]
    pub website_url: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "sponsorship_url must be a valid URL"))]
    pub sponsorship_url: Option<String>,
    pub total_repositories: Option<i32>,
    pub total_stars: Option<i32>,
}

impl UpdateOrganizationRequest {
    /// Build a patch: absent fields stay `NotSet` and keep their stored
    /// values.
    pub fn into_patch(self) -> organization::ActiveModel {
        let mut patch = organization::ActiveModel::default();
        if let Some(name) = self.name {
            patch.name = Set(name);
        }
        if let Some(url) = self.github_url {
            patch.github_url = Set(Some(url));
        }
        if let Some(url) = self.website_url {
            patch.website_url = Set(Some(url));
        }
        if let Some(desc) = self.description {
            patch.description = Set(Some(desc));
        }
        if let Some(url) = self.sponsorship_url {
            patch.sponsorship_url = Set(Some(url));
        }
        if let Some(n) = self.total_repositories {
            patch.total_repositories = Set(n);
        }
        if let Some(n) = self.total_stars {
            patch.total_stars = Set(n);
        }
        patch
    }
}
