//! API Router with Swagger UI

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, PageQuery, PaginatedResponse};
use super::modules::{
    dependencies, health, organizations, packages, repositories, AppState,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Organizations
        organizations::handlers::list_organizations,
        organizations::handlers::get_organization,
        organizations::handlers::get_organization_by_name,
        organizations::handlers::create_organization,
        organizations::handlers::update_organization,
        organizations::handlers::delete_organization,
        // Repositories
        repositories::handlers::list_repositories,
        repositories::handlers::get_repository,
        repositories::handlers::create_repository,
        repositories::handlers::update_repository,
        repositories::handlers::delete_repository,
        // Packages
        packages::handlers::list_packages,
        packages::handlers::get_package,
        packages::handlers::create_package,
        packages::handlers::update_package,
        packages::handlers::delete_package,
        // Dependencies
        dependencies::handlers::list_dependencies,
        dependencies::handlers::get_dependency,
        dependencies::handlers::create_dependency,
        dependencies::handlers::update_dependency,
        dependencies::handlers::delete_dependency,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PageQuery,
            PaginatedResponse<organizations::OrganizationResponse>,
            PaginatedResponse<repositories::RepositoryResponse>,
            PaginatedResponse<packages::PackageResponse>,
            PaginatedResponse<dependencies::DependencyResponse>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Organizations
            organizations::OrganizationResponse,
            organizations::CreateOrganizationRequest,
            organizations::UpdateOrganizationRequest,
            // Repositories
            repositories::RepositoryResponse,
            repositories::CreateRepositoryRequest,
            repositories::UpdateRepositoryRequest,
            // Packages
            packages::PackageResponse,
            packages::CreatePackageRequest,
            packages::UpdatePackageRequest,
            // Dependencies
            dependencies::DependencyResponse,
            dependencies::CreateDependencyRequest,
            dependencies::UpdateDependencyRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Organizations", description = "GitHub organization CRUD operations"),
        (name = "Repositories", description = "Repository CRUD operations"),
        (name = "Packages", description = "Package registry entries"),
        (name = "Dependencies", description = "Repository-to-package dependency edges"),
    ),
    info(
        title = "Wump API",
        version = "1.0.0",
        description = "REST API for tracking organizations, repositories, packages and their dependencies",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(db);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let organization_routes = Router::new()
        .route(
            "/",
            get(organizations::handlers::list_organizations)
                .post(organizations::handlers::create_organization),
        )
        .route(
            "/by-name/{name}",
            get(organizations::handlers::get_organization_by_name),
        )
        .route(
            "/{id}",
            get(organizations::handlers::get_organization)
                .put(organizations::handlers::update_organization)
                .delete(organizations::handlers::delete_organization),
        );

    let repository_routes = Router::new()
        .route(
            "/",
            get(repositories::handlers::list_repositories)
                .post(repositories::handlers::create_repository),
        )
        .route(
            "/{id}",
            get(repositories::handlers::get_repository)
                .put(repositories::handlers::update_repository)
                .delete(repositories::handlers::delete_repository),
        );

    let package_routes = Router::new()
        .route(
            "/",
            get(packages::handlers::list_packages).post(packages::handlers::create_package),
        )
        .route(
            "/{id}",
            get(packages::handlers::get_package)
                .put(packages::handlers::update_package)
                .delete(packages::handlers::delete_package),
        );

    let dependency_routes = Router::new()
        .route(
            "/",
            get(dependencies::handlers::list_dependencies)
                .post(dependencies::handlers::create_dependency),
        )
        .route(
            "/{id}",
            get(dependencies::handlers::get_dependency)
                .put(dependencies::handlers::update_dependency)
                .delete(dependencies::handlers::delete_dependency),
        );

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        // Resources
        .nest("/api/v1/organizations", organization_routes)
        .nest("/api/v1/repositories", repository_routes)
        .nest("/api/v1/packages", package_routes)
        .nest("/api/v1/dependencies", dependency_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use tower::ServiceExt;

    use crate::infrastructure::database::migrator::Migrator;

    async fn app() -> Router {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.expect("connect");
        Migrator::up(&db, None).await.expect("migrate");
        create_api_router(db)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = app().await;
        let resp = app.oneshot(get_req("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn organization_crud_over_http() {
        let app = app().await;

        // create
        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/v1/organizations",
                serde_json::json!({"name": "acme", "github_url": "https://github.com/acme"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["success"], true);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        // duplicate name conflicts
        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/v1/organizations",
                serde_json::json!({"name": "acme"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        // fetch by id and by name
        let resp = app
            .clone()
            .oneshot(get_req(&format!("/api/v1/organizations/{id}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .clone()
            .oneshot(get_req("/api/v1/organizations/by-name/acme"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // soft delete, then the organization is gone from reads
        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/organizations/{id}"))
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .clone()
            .oneshot(get_req(&format!("/api/v1/organizations/{id}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_pagination_is_rejected() {
        let app = app().await;
        let resp = app
            .oneshot(get_req("/api/v1/organizations?limit=500"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_body_is_unprocessable() {
        let app = app().await;
        let resp = app
            .oneshot(post_json(
                "/api/v1/organizations",
                serde_json::json!({"name": ""}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_dependency_type_is_bad_request() {
        let app = app().await;
        let resp = app
            .oneshot(post_json(
                "/api/v1/dependencies",
                serde_json::json!({
                    "repository_id": "7f9c24e5-2f02-4c1e-9c91-2f35d4c0a2a1",
                    "package_id": "0d4f7c92-5f7b-4e42-8a57-6d2f9d4b5c6e",
                    "dependency_type": "TRANSITIVE"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
