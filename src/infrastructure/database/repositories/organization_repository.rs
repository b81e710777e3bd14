//! Organization repository - generic CRUD plus name lookup

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::debug;
use uuid::Uuid;

use super::base::Repository;
use super::uow::{active, UnitOfWork};
use crate::domain::error::{RepositoryError, RepositoryResult};
use crate::domain::pagination::{PaginatedResult, PaginationParams};
use crate::infrastructure::database::entities::organization;

/// Repository for organizations.
///
/// Composes the generic `Repository` for the uniform operations and adds
/// the one query organizations need beyond it: exact lookup by name.
pub struct OrganizationRepository {
    inner: Repository<organization::Entity>,
}

impl OrganizationRepository {
    pub fn new(uow: UnitOfWork) -> Self {
        Self {
            inner: Repository::new(uow),
        }
    }

    pub async fn create(
        &self,
        model: organization::ActiveModel,
    ) -> RepositoryResult<organization::Model> {
        self.inner.create(model).await
    }

    pub async fn get(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> RepositoryResult<Option<organization::Model>> {
        self.inner.get(id, include_deleted).await
    }

    pub async fn get_or_fail(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> RepositoryResult<organization::Model> {
        self.inner.get_or_fail(id, include_deleted).await
    }

    /// Exact, case-sensitive lookup by organization name. Soft-deleted
    /// organizations are never returned.
    pub async fn get_by_name(&self, name: &str) -> RepositoryResult<Option<organization::Model>> {
        let slot = self.inner.unit_of_work().slot().await;
        let txn = active(&slot, "organization", "get_by_name")?;
        let found = organization::Entity::find()
            .filter(organization::Column::Name.eq(name))
            .filter(organization::Column::DeletedAt.is_null())
            .one(txn)
            .await
            .map_err(|e| RepositoryError::OperationFailed {
                entity: "organization",
                operation: "get_by_name",
                source: e,
            })?;
        debug!(name, found = found.is_some(), "get organization by name");
        Ok(found)
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: organization::ActiveModel,
    ) -> RepositoryResult<Option<organization::Model>> {
        self.inner.update(id, patch).await
    }

    pub async fn delete(&self, id: Uuid, soft: bool) -> RepositoryResult<bool> {
        self.inner.delete(id, soft).await
    }

    pub async fn list(
        &self,
        pagination: PaginationParams,
        include_deleted: bool,
    ) -> RepositoryResult<PaginatedResult<organization::Model>> {
        self.inner.list(pagination, include_deleted).await
    }

    pub async fn count(&self, include_deleted: bool) -> RepositoryResult<u64> {
        self.inner.count(include_deleted).await
    }

    pub async fn commit(&self) -> RepositoryResult<()> {
        self.inner.commit().await
    }

    pub async fn rollback(&self) {
        self.inner.rollback().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection, Set};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;

    async fn setup() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.expect("connect");
        Migrator::up(&db, None).await.expect("migrate");
        db
    }

    fn org(name: &str) -> organization::ActiveModel {
        organization::ActiveModel {
            name: Set(name.to_string()),
            total_repositories: Set(0),
            total_stars: Set(0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_by_name_is_exact_and_case_sensitive() {
        let db = setup().await;
        let repo = OrganizationRepository::new(UnitOfWork::begin(&db).await.unwrap());

        let created = repo.create(org("Tokio")).await.unwrap();

        let found = repo.get_by_name("Tokio").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);

        assert!(repo.get_by_name("tokio").await.unwrap().is_none());
        assert!(repo.get_by_name("Tok").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_by_name_skips_soft_deleted() {
        let db = setup().await;
        let repo = OrganizationRepository::new(UnitOfWork::begin(&db).await.unwrap());

        let created = repo.create(org("Tokio")).await.unwrap();
        repo.delete(created.id, true).await.unwrap();

        assert!(repo.get_by_name("Tokio").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn name_can_be_reused_after_hard_delete() {
        let db = setup().await;
        let repo = OrganizationRepository::new(UnitOfWork::begin(&db).await.unwrap());

        let first = repo.create(org("Tokio")).await.unwrap();
        repo.delete(first.id, false).await.unwrap();

        let second = repo.create(org("Tokio")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(
            repo.get_by_name("Tokio").await.unwrap().unwrap().id,
            second.id
        );
    }
}
