//! Dependency REST API handlers
//!
//! Dependency edges have no soft delete; DELETE is always permanent.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateDependencyRequest, DependencyResponse, UpdateDependencyRequest};
use crate::domain::RepositoryError;
use crate::infrastructure::database::entities::dependency;
use crate::infrastructure::database::repositories::{Repository, UnitOfWork};
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PageQuery, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::AppState;

type DependencyRepository = Repository<dependency::Entity>;

#[utoipa::path(
    get,
    path = "/api/v1/dependencies",
    tag = "Dependencies",
    params(PageQuery),
    responses(
        (status = 200, description = "Dependency page", body = ApiResponse<PaginatedResponse<DependencyResponse>>),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_dependencies(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<DependencyResponse>>>, ApiError> {
    let params = query.params()?;
    let repo = DependencyRepository::new(UnitOfWork::begin(&state.db).await?);
    let page = repo.list(params, query.include_deleted).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/dependencies/{id}",
    tag = "Dependencies",
    params(("id" = Uuid, Path, description = "Dependency ID")),
    responses(
        (status = 200, description = "Dependency details", body = ApiResponse<DependencyResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_dependency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DependencyResponse>>, ApiError> {
    let repo = DependencyRepository::new(UnitOfWork::begin(&state.db).await?);
    let found = repo.get_or_fail(id, false).await?;
    Ok(Json(ApiResponse::success(found.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/dependencies",
    tag = "Dependencies",
    request_body = CreateDependencyRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<DependencyResponse>),
        (status = 400, description = "Unknown dependency type"),
        (status = 409, description = "Edge already recorded"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_dependency(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDependencyRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DependencyResponse>>), ApiError> {
    let model = req.into_active_model()?;
    let repo = DependencyRepository::new(UnitOfWork::begin(&state.db).await?);
    let created = match repo.create(model).await {
        Ok(d) => d,
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
    path = "/api/v1/dependencies/{id}",
    tag = "Dependencies",
    params(("id" = Uuid, Path, description = "Dependency ID")),
    request_body = UpdateDependencyRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<DependencyResponse>),
        (status = 400, description = "Unknown dependency type"),
        (status = 404, description = "Not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn update_dependency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateDependencyRequest>,
) -> Result<Json<ApiResponse<DependencyResponse>>, ApiError> {
    let patch = req.into_patch()?;
    let repo = DependencyRepository::new(UnitOfWork::begin(&state.db).await?);
    let updated = match repo.update(id, patch).await {
        Ok(Some(d)) => d,
        Ok(None) => {
            repo.rollback().await;
            return Err(RepositoryError::not_found("dependency", id).into());
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
    path = "/api/v1/dependencies/{id}",
    tag = "Dependencies",
    params(("id" = Uuid, Path, description = "Dependency ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_dependency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let repo = DependencyRepository::new(UnitOfWork::begin(&state.db).await?);
    let removed = match repo.delete(id, false).await {
        Ok(removed) => removed,
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    if !removed {
        repo.rollback().await;
        return Err(RepositoryError::not_found("dependency", id).into());
    }
    repo.commit().await?;
    Ok(Json(ApiResponse::success("Dependency deleted".to_string())))
}
