//! Dependency DTOs

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{RepositoryError, RepositoryResult};
use crate::infrastructure::database::entities::dependency::{self, DependencyType};

/// Parse a dependency type string (DIRECT, DEV, OPTIONAL, PEER).
pub fn parse_dependency_type(s: &str) -> RepositoryResult<DependencyType> {
    match s {
        "DIRECT" => Ok(DependencyType::Direct),
        "DEV" => Ok(DependencyType::Dev),
        "OPTIONAL" => Ok(DependencyType::Optional),
        "PEER" => Ok(DependencyType::Peer),
        other => Err(RepositoryError::invalid_argument(format!(
            "unknown dependency type: {}",
            other
        ))),
    }
}

/// Dependency edge details
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DependencyResponse {
    pub id: Uuid,
    pub repository_id: Uuid,
    pub package_id: Uuid,
    pub version: Option<String>,
    pub dependency_type: Option<String>,
    pub detected_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<dependency::Model> for DependencyResponse {
    fn from(m: dependency::Model) -> Self {
        Self {
            id: m.id,
            repository_id: m.repository_id,
            package_id: m.package_id,
            version: m.version,
            dependency_type: m.dependency_type.map(|t| t.to_string()),
            detected_at: m.detected_at,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDependencyRequest {
    pub repository_id: Uuid,
    pub package_id: Uuid,
    #[validate(length(max = 100, message = "version string too long"))]
    pub version: Option<String>,
    /// One of DIRECT, DEV, OPTIONAL, PEER
    pub dependency_type: Option<String>,
    pub detected_at: Option<DateTime<Utc>>,
}

impl CreateDependencyRequest {
    pub fn into_active_model(self) -> RepositoryResult<dependency::ActiveModel> {
        let dependency_type = self
            .dependency_type
            .as_deref()
            .map(parse_dependency_type)
            .transpose()?;
        let mut model = dependency::ActiveModel {
            repository_id: Set(self.repository_id),
            package_id: Set(self.package_id),
            version: Set(self.version),
            dependency_type: Set(dependency_type),
            ..Default::default()
        };
        if let Some(ts) = self.detected_at {
            model.detected_at = Set(ts);
        }
        Ok(model)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDependencyRequest {
    #[validate(length(max = 100, message = "version string too long"))]
    pub version: Option<String>,
    /// One of DIRECT, DEV, OPTIONAL, PEER
    pub dependency_type: Option<String>,
    pub detected_at: Option<DateTime<Utc>>,
}

impl UpdateDependencyRequest {
    /// Build a patch: absent fields stay `NotSet` and keep their stored
    /// values.
    pub fn into_patch(self) -> RepositoryResult<dependency::ActiveModel> {
        let mut patch = dependency::ActiveModel::default();
        if let Some(version) = self.version {
            patch.version = Set(Some(version));
        }
        if let Some(kind) = self.dependency_type {
            patch.dependency_type = Set(Some(parse_dependency_type(&kind)?));
        }
        if let Some(ts) = self.detected_at {
            patch.detected_at = Set(ts);
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_type_round_trips_through_parse() {
        for s in ["DIRECT", "DEV", "OPTIONAL", "PEER"] {
            assert_eq!(parse_dependency_type(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn unknown_dependency_type_is_invalid_argument() {
        let err = parse_dependency_type("TRANSITIVE").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidArgument(_)));
    }
}
