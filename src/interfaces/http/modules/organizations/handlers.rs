//! Organization REST API handlers
//!
//! Each handler opens its own unit of work; writes commit on success and
//! roll back on failure, reads just drop the transaction.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::dto::{CreateOrganizationRequest, OrganizationResponse, UpdateOrganizationRequest};
use crate::domain::RepositoryError;
use crate::infrastructure::database::repositories::{OrganizationRepository, UnitOfWork};
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PageQuery, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::AppState;

/// Delete mode query
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteQuery {
    /// Permanently remove the record instead of soft-deleting it
    #[serde(default)]
    pub hard: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations",
    tag = "Organizations",
    params(PageQuery),
    responses(
        (status = 200, description = "Organization page", body = ApiResponse<PaginatedResponse<OrganizationResponse>>),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_organizations(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<OrganizationResponse>>>, ApiError> {
    let params = query.params()?;
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let page = repo.list(params, query.include_deleted).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{id}",
    tag = "Organizations",
    params(("id" = Uuid, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization details", body = ApiResponse<OrganizationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let org = repo.get_or_fail(id, false).await?;
    Ok(Json(ApiResponse::success(org.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/by-name/{name}",
    tag = "Organizations",
    params(("name" = String, Path, description = "Organization name, exact match")),
    responses(
        (status = 200, description = "Organization details", body = ApiResponse<OrganizationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_organization_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let org = repo
        .get_by_name(&name)
        .await?
        .ok_or_else(|| RepositoryError::not_found("organization", &name))?;
    Ok(Json(ApiResponse::success(org.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/organizations",
    tag = "Organizations",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<OrganizationResponse>),
        (status = 409, description = "Name already taken"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_organization(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrganizationResponse>>), ApiError> {
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let created = match repo.create(req.into_active_model()).await {
        Ok(org) => org,
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    repo.commit().await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/organizations/{id}",
    tag = "Organizations",
    params(("id" = Uuid, Path, description = "Organization ID")),
    request_body = UpdateOrganizationRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<OrganizationResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn update_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateOrganizationRequest>,
) -> Result<Json<ApiResponse<OrganizationResponse>>, ApiError> {
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let updated = match repo.update(id, req.into_patch()).await {
        Ok(Some(org)) => org,
        Ok(None) => {
            repo.rollback().await;
            return Err(RepositoryError::not_found("organization", id).into());
        }
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    repo.commit().await?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/organizations/{id}",
    tag = "Organizations",
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        DeleteQuery
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let repo = OrganizationRepository::new(UnitOfWork::begin(&state.db).await?);
    let removed = match repo.delete(id, !query.hard).await {
        Ok(removed) => removed,
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    if !removed {
        repo.rollback().await;
        return Err(RepositoryError::not_found("organization", id).into());
    }
    repo.commit().await?;
    Ok(Json(ApiResponse::success(
        "Organization deleted".to_string(),
    )))
}
