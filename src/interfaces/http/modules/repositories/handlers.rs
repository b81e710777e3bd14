//! Repository REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::dto::{CreateRepositoryRequest, RepositoryResponse, UpdateRepositoryRequest};
use crate::domain::RepositoryError;
use crate::infrastructure::database::entities::repository;
use crate::infrastructure::database::repositories::{Repository, UnitOfWork};
use crate::interfaces::http::common::{
    ApiError, ApiResponse, PageQuery, PaginatedResponse, ValidatedJson,
};
use crate::interfaces::http::modules::organizations::handlers::DeleteQuery;
use crate::interfaces::http::modules::AppState;

type RepoRepository = Repository<repository::Entity>;

#[utoipa::path(
    get,
    path = "/api/v1/repositories",
    tag = "Repositories",
    params(PageQuery),
    responses(
        (status = 200, description = "Repository page", body = ApiResponse<PaginatedResponse<RepositoryResponse>>),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn list_repositories(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<RepositoryResponse>>>, ApiError> {
    let params = query.params()?;
    let repo = RepoRepository::new(UnitOfWork::begin(&state.db).await?);
    let page = repo.list(params, query.include_deleted).await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/repositories/{id}",
    tag = "Repositories",
    params(("id" = Uuid, Path, description = "Repository ID")),
    responses(
        (status = 200, description = "Repository details", body = ApiResponse<RepositoryResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_repository(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RepositoryResponse>>, ApiError> {
    let repo = RepoRepository::new(UnitOfWork::begin(&state.db).await?);
    let found = repo.get_or_fail(id, false).await?;
    Ok(Json(ApiResponse::success(found.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/repositories",
    tag = "Repositories",
    request_body = CreateRepositoryRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<RepositoryResponse>),
        (status = 409, description = "GitHub URL already registered"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_repository(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateRepositoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RepositoryResponse>>), ApiError> {
    let repo = RepoRepository::new(UnitOfWork::begin(&state.db).await?);
    let created = match repo.create(req.into_active_model()).await {
        Ok(r) => r,
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
    path = "/api/v1/repositories/{id}",
    tag = "Repositories",
    params(("id" = Uuid, Path, description = "Repository ID")),
    request_body = UpdateRepositoryRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<RepositoryResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn update_repository(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRepositoryRequest>,
) -> Result<Json<ApiResponse<RepositoryResponse>>, ApiError> {
    let repo = RepoRepository::new(UnitOfWork::begin(&state.db).await?);
    let updated = match repo.update(id, req.into_patch()).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            repo.rollback().await;
            return Err(RepositoryError::not_found("repository", id).into());
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
    path = "/api/v1/repositories/{id}",
    tag = "Repositories",
    params(
        ("id" = Uuid, Path, description = "Repository ID"),
        DeleteQuery
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_repository(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let repo = RepoRepository::new(UnitOfWork::begin(&state.db).await?);
    let removed = match repo.delete(id, !query.hard).await {
        Ok(removed) => removed,
        Err(e) => {
            repo.rollback().await;
            return Err(e.into());
        }
    };
    if !removed {
        repo.rollback().await;
        return Err(RepositoryError::not_found("repository", id).into());
    }
    repo.commit().await?;
    Ok(Json(ApiResponse::success("Repository deleted".to_string())))
}
