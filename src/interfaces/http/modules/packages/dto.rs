//! Package DTOs

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::infrastructure::database::entities::package;

/// Package details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PackageResponse {
    pub id: Uuid,
    pub name: String,
    pub ecosystem: String,
    pub description: Option<String>,
    pub repository_url: Option<String>,
    pub homepage_url: Option<String>,
    pub latest_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<package::Model> for PackageResponse {
    fn from(m: package::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            ecosystem: m.ecosystem,
            description: m.description,
            repository_url: m.repository_url,
            homepage_url: m.homepage_url,
            latest_version: m.latest_version,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePackageRequest {
    #[validate(length(min = 1, max = 255, message = "package name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "ecosystem is required"))]
    pub ecosystem: String,
    pub description: Option<String>,
    #[validate(url(message = "repository_url must be a valid URL"))]
    pub repository_url: Option<String>,
    #[validate(url(message = "homepage_url must be a valid URL"))]
    pub homepage_url: Option<String>,
    pub latest_version: Option<String>,
}

impl CreatePackageRequest {
    pub fn into_active_model(self) -> package::ActiveModel {
        package::ActiveModel {
            name: Set(self.name),
            ecosystem: Set(self.ecosystem),
            description: Set(self.description),
            repository_url: Set(self.repository_url),
            homepage_url: Set(self.homepage_url),
            latest_version: Set(self.latest_version),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePackageRequest {
    #[validate(length(min = 1, max = 255, message = "package name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "ecosystem must not be empty"))]
    pub ecosystem: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "repository_url must be a valid URL"))]
    pub repository_url: Option<String>,
    #[validate(url(message = "homepage_url must be a valid URL"))]
    pub homepage_url: Option<String>,
    pub latest_version: Option<String>,
}

impl UpdatePackageRequest {
    /// Build a patch: absent fields stay `NotSet` and keep their stored
    /// values.
    pub fn into_patch(self) -> package::ActiveModel {
        let mut patch = package::ActiveModel::default();
        if let Some(name) = self.name {
            patch.name = Set(name);
        }
        if let Some(eco) = self.ecosystem {
            patch.ecosystem = Set(eco);
        }
        if let Some(desc) = self.description {
            patch.description = Set(Some(desc));
        }
        if let Some(url) = self.repository_url {
            patch.repository_url = Set(Some(url));
        }
        if let Some(url) = self.homepage_url {
            patch.homepage_url = Set(Some(url));
        }
        if let Some(ver) = self.latest_version {
            patch.latest_version = Set(Some(ver));
        }
        patch
    }
}
