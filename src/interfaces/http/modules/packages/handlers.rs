//! Package REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreatePackageRequest, PackageResponse, UpdatePackageRequest};
use crate::domain::RepositoryError;
use crate::infrastructure::database::entities::package;
use crate::infrastructure::database::repositories::{Repository, UnitOfWork};
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PageQuery, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::organizations::handlers::DeleteQuery;
use crate::interfaces::http::modules::AppState;

type PackageRepository = Repository<package::Entity>;

#[utoipa::path(
    get,
    path = "/api/v1/packages",
    tag = "Packages",
    params(PageQuery),
    responses(
        (status = 200, description = "Package page", body = ApiResponse<PaginatedResponse<PackageResponse>>),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_packages(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<PackageResponse>>>, ApiError> {
    let params = query.params()?;
    let repo = PackageRepository::new(UnitOfWork::begin(&state.db).await?);
    let page = repo.list(params, query.include_deleted).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package details", body = ApiResponse<PackageResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PackageResponse>>, ApiError> {
    let repo = PackageRepository::new(UnitOfWork::begin(&state.db).await?);
    let found = repo.get_or_fail(id, false).await?;
    Ok(Json(ApiResponse::success(found.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/packages",
    tag = "Packages",
    request_body = CreatePackageRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<PackageResponse>),
        (status = 409, description = "Package already registered in this ecosystem"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_package(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreatePackageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PackageResponse>>), ApiError> {
    let repo = PackageRepository::new(UnitOfWork::begin(&state.db).await?);
    let created = match repo.create(req.into_active_model()).await {
        Ok(p) => p,
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
    path = "/api/v1/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    request_body = UpdatePackageRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<PackageResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdatePackageRequest>,
) -> Result<Json<ApiResponse<PackageResponse>>, ApiError> {
    let repo = PackageRepository::new(UnitOfWork::begin(&state.db).await?);
    let updated = match repo.update(id, req.into_patch()).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            repo.rollback().await;
            return Err(RepositoryError::not_found("package", id).into());
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
    path = "/api/v1/packages/{id}",
    tag = "Packages",
    params(
        ("id" = Uuid, Path, description = "Package ID"),
        DeleteQuery
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let repo = PackageRepository::new(UnitOfWork::begin(&state.db).await?);
    let removed = match repo.delete(id, !query.hard).await {
        Ok(removed) => removed,
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    if !removed {
        repo.rollback().await;
        return Err(RepositoryError::not_found("package", id).into());
    }
    repo.commit().await?;
    Ok(Json(ApiResponse::success("Package deleted".to_string())))
}
