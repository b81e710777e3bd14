//! Generic repository - uniform CRUD for any entity
//!
//! `Repository<E>` is parameterized over a SeaORM entity that declares its
//! capabilities through `CrudEntityDef`. The same code path then gives
//! every entity type create/get/update/delete/list/count with consistent
//! soft-delete filtering, pagination, `updated_at` stamping, error
//! translation and tracing.
//!
//! Entity repositories compose this type rather than inheriting from it;
//! see `OrganizationRepository` for the pattern.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Value,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::uow::{active, UnitOfWork};
use crate::domain::error::{RepositoryError, RepositoryResult};
use crate::domain::pagination::{PaginatedResult, PaginationParams};

/// Capability descriptor an entity must provide to be served by
/// `Repository<E>`.
///
/// Capabilities are declared once per entity and resolved at compile time:
/// an entity without a `deleted_at` column simply returns `None` and every
/// soft-delete code path turns into hard-delete / no-filter behavior.
pub trait CrudEntityDef: EntityTrait {
    /// Entity name used in errors and tracing.
    const NAME: &'static str;

    /// UUID primary key column.
    fn id_column() -> Self::Column;

    /// Creation timestamp column, used for default list ordering.
    fn created_at_column() -> Option<Self::Column> {
        None
    }

    /// Last-update timestamp column, stamped on every update.
    fn updated_at_column() -> Option<Self::Column> {
        None
    }

    /// Soft-delete marker column. `None` means the entity is
    /// hard-delete-only.
    fn deleted_at_column() -> Option<Self::Column> {
        None
    }
}

/// Generic repository over one entity type and one unit of work.
///
/// The repository borrows the unit of work for every call and never closes
/// it; the caller owns the transaction lifecycle. Within one unit of work
/// operations observe their own writes, since inserts and updates execute
/// against the open transaction before returning.
pub struct Repository<E: CrudEntityDef> {
    uow: UnitOfWork,
    _entity: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: CrudEntityDef,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    pub fn new(uow: UnitOfWork) -> Self {
        Self {
            uow,
            _entity: PhantomData,
        }
    }

    /// The unit of work this repository operates in.
    pub fn unit_of_work(&self) -> &UnitOfWork {
        &self.uow
    }

    fn op_failed(operation: &'static str, source: DbErr) -> RepositoryError {
        RepositoryError::OperationFailed {
            entity: E::NAME,
            operation,
            source,
        }
    }

    /// Insert a new entity and return it fully populated.
    ///
    /// The insert is flushed inside the open transaction, so the generated
    /// id and timestamps are available immediately, but nothing is durable
    /// until the caller commits. Uniqueness violations map to
    /// `AlreadyExists`.
    pub async fn create(&self, model: E::ActiveModel) -> RepositoryResult<E::Model> {
        let slot = self.uow.slot().await;
        let txn = active(&slot, E::NAME, "create")?;
        let created = model
            .insert(txn)
            .await
            .map_err(|e| RepositoryError::from_db(E::NAME, "create", e))?;
        info!(entity = E::NAME, "entity created");
        Ok(created)
    }

    /// Look up by primary key. Soft-deleted rows are absent unless
    /// `include_deleted` is set.
    pub async fn get(&self, id: Uuid, include_deleted: bool) -> RepositoryResult<Option<E::Model>> {
        let slot = self.uow.slot().await;
        let txn = active(&slot, E::NAME, "get")?;
        let mut query = E::find().filter(E::id_column().eq(id));
        if !include_deleted {
            if let Some(deleted) = E::deleted_at_column() {
                query = query.filter(deleted.is_null());
            }
        }
        let found = query
            .one(txn)
            .await
            .map_err(|e| Self::op_failed("get", e))?;
        debug!(entity = E::NAME, %id, found = found.is_some(), "get by id");
        Ok(found)
    }

    /// Like `get`, but absence is a hard `NotFound` failure carrying the
    /// entity name and id.
    pub async fn get_or_fail(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> RepositoryResult<E::Model> {
        self.get(id, include_deleted)
            .await?
            .ok_or_else(|| RepositoryError::not_found(E::NAME, id))
    }

    /// Apply the `Set` fields of `patch` to the non-deleted row with the
    /// given id, stamping `updated_at` in the same statement when the
    /// entity has one.
    ///
    /// Returns `None` when no matching live row exists; callers that need
    /// a hard failure check the `None` themselves.
    pub async fn update(
        &self,
        id: Uuid,
        mut patch: E::ActiveModel,
    ) -> RepositoryResult<Option<E::Model>> {
        {
            let slot = self.uow.slot().await;
            let txn = active(&slot, E::NAME, "update")?;
            if let Some(updated) = E::updated_at_column() {
                patch.set(updated, Value::from(Utc::now()));
            }
            let mut query = E::update_many().set(patch).filter(E::id_column().eq(id));
            if let Some(deleted) = E::deleted_at_column() {
                query = query.filter(deleted.is_null());
            }
            let result = query
                .exec(txn)
                .await
                .map_err(|e| RepositoryError::from_db(E::NAME, "update", e))?;
            if result.rows_affected == 0 {
                debug!(entity = E::NAME, %id, "update matched no row");
                return Ok(None);
            }
            info!(entity = E::NAME, %id, "entity updated");
        }
        self.get(id, false).await
    }

    /// Delete by id, softly by default.
    ///
    /// Soft delete stamps `deleted_at` (and `updated_at`) on the live row
    /// only; deleting an already-soft-deleted row returns `false`, not an
    /// error. When `soft` is false, or the entity has no soft-delete
    /// column, the row is removed permanently - including rows that were
    /// previously soft-deleted, so hard delete can reap them.
    pub async fn delete(&self, id: Uuid, soft: bool) -> RepositoryResult<bool> {
        if soft {
            if let Some(deleted) = E::deleted_at_column() {
                let slot = self.uow.slot().await;
                let txn = active(&slot, E::NAME, "delete")?;
                let now = Utc::now();
                let mut query = E::update_many()
                    .col_expr(deleted, Expr::value(now))
                    .filter(E::id_column().eq(id))
                    .filter(deleted.is_null());
                if let Some(updated) = E::updated_at_column() {
                    query = query.col_expr(updated, Expr::value(now));
                }
                let result = query
                    .exec(txn)
                    .await
                    .map_err(|e| Self::op_failed("delete", e))?;
                let removed = result.rows_affected > 0;
                info!(entity = E::NAME, %id, removed, soft = true, "delete");
                return Ok(removed);
            }
        }

        if self.get(id, true).await?.is_none() {
            debug!(entity = E::NAME, %id, "delete matched no row");
            return Ok(false);
        }
        let slot = self.uow.slot().await;
        let txn = active(&slot, E::NAME, "delete")?;
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(txn)
            .await
            .map_err(|e| Self::op_failed("delete", e))?;
        let removed = result.rows_affected > 0;
        info!(entity = E::NAME, %id, removed, soft = false, "delete");
        Ok(removed)
    }

    /// List one page of entities plus the total count under the same
    /// filter, ordered by `created_at` descending when the entity has it,
    /// otherwise by id ascending.
    ///
    /// Count and page are two reads in the same transaction; under
    /// concurrent writers the total is only as stable as the store's
    /// isolation level makes it.
    pub async fn list(
        &self,
        pagination: PaginationParams,
        include_deleted: bool,
    ) -> RepositoryResult<PaginatedResult<E::Model>> {
        let slot = self.uow.slot().await;
        let txn = active(&slot, E::NAME, "list")?;
        let mut query = E::find();
        if !include_deleted {
            if let Some(deleted) = E::deleted_at_column() {
                query = query.filter(deleted.is_null());
            }
        }
        let total = query
            .clone()
            .count(txn)
            .await
            .map_err(|e| Self::op_failed("list", e))?;
        let query = match E::created_at_column() {
            Some(created) => query.order_by_desc(created),
            None => query.order_by_asc(E::id_column()),
        };
        let items = query
            .offset(pagination.offset())
            .limit(pagination.limit())
            .all(txn)
            .await
            .map_err(|e| Self::op_failed("list", e))?;
        debug!(
            entity = E::NAME,
            count = items.len(),
            total,
            offset = pagination.offset(),
            "list"
        );
        Ok(PaginatedResult::new(items, total, pagination))
    }

    /// Count entities under the same soft-delete filter policy as `list`.
    pub async fn count(&self, include_deleted: bool) -> RepositoryResult<u64> {
        let slot = self.uow.slot().await;
        let txn = active(&slot, E::NAME, "count")?;
        let mut query = E::find();
        if !include_deleted {
            if let Some(deleted) = E::deleted_at_column() {
                query = query.filter(deleted.is_null());
            }
        }
        query.count(txn).await.map_err(|e| Self::op_failed("count", e))
    }

    /// Commit the unit of work. Delegates; see `UnitOfWork::commit`.
    pub async fn commit(&self) -> RepositoryResult<()> {
        self.uow.commit().await
    }

    /// Roll back the unit of work. Delegates; see `UnitOfWork::rollback`.
    pub async fn rollback(&self) {
        self.uow.rollback().await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database, DatabaseConnection, Set};
    use sea_orm_migration::MigratorTrait;

    use crate::domain::error::RepositoryError;
    use crate::infrastructure::database::entities::{
        dependency, organization, package, repository,
    };
    use crate::infrastructure::database::migrator::Migrator;

    type OrgRepo = Repository<organization::Entity>;

    async fn setup() -> DatabaseConnection {
        // Single connection so the in-memory database is shared across
        // sequential units of work.
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.expect("connect");
        Migrator::up(&db, None).await.expect("migrate");
        db
    }

    fn org(name: &str) -> organization::ActiveModel {
        organization::ActiveModel {
            name: Set(name.to_string()),
            github_url: Set(Some(format!("https://github.com/{name}"))),
            total_repositories: Set(0),
            total_stars: Set(0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_populates_generated_fields_and_round_trips() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let created = repo.create(org("acme")).await.unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.name, "acme");
        assert_eq!(
            created.github_url.as_deref(),
            Some("https://github.com/acme")
        );
        assert!(created.deleted_at.is_none());

        // Read-your-writes inside the same unit of work.
        let fetched = repo.get(created.id, false).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, created.name);
    }

    #[tokio::test]
    async fn duplicate_name_is_already_exists() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        repo.create(org("acme")).await.unwrap();
        let err = repo.create(org("acme")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn get_absent_is_none_but_get_or_fail_is_not_found() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let missing = Uuid::new_v4();
        assert!(repo.get(missing, false).await.unwrap().is_none());

        let err = repo.get_or_fail(missing, false).await.unwrap_err();
        match err {
            RepositoryError::NotFound { entity, id } => {
                assert_eq!(entity, "organization");
                assert_eq!(id, missing.to_string());
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_applies_patch_and_touches_updated_at() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let created = repo.create(org("acme")).await.unwrap();
        let before = created.updated_at;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let patch = organization::ActiveModel {
            description: Set(Some("tools for wumpuses".to_string())),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.description.as_deref(), Some("tools for wumpuses"));
        assert_eq!(updated.name, "acme");
        assert!(updated.updated_at > before);
    }

    #[tokio::test]
    async fn update_absent_row_is_none() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let patch = organization::ActiveModel {
            description: Set(Some("nope".to_string())),
            ..Default::default()
        };
        assert!(repo.update(Uuid::new_v4(), patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn soft_delete_hides_row_and_is_idempotent() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let created = repo.create(org("acme")).await.unwrap();

        assert!(repo.delete(created.id, true).await.unwrap());
        assert!(repo.get(created.id, false).await.unwrap().is_none());

        let hidden = repo.get(created.id, true).await.unwrap().unwrap();
        assert!(hidden.deleted_at.is_some());

        // Second soft delete matches nothing: false, not an error.
        assert!(!repo.delete(created.id, true).await.unwrap());
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_invisible_to_update() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let created = repo.create(org("acme")).await.unwrap();
        repo.delete(created.id, true).await.unwrap();

        let patch = organization::ActiveModel {
            description: Set(Some("ghost write".to_string())),
            ..Default::default()
        };
        assert!(repo.update(created.id, patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn hard_delete_reaps_soft_deleted_rows() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let created = repo.create(org("acme")).await.unwrap();
        repo.delete(created.id, true).await.unwrap();

        assert!(repo.delete(created.id, false).await.unwrap());
        assert!(repo.get(created.id, true).await.unwrap().is_none());

        // Gone for good: another hard delete finds nothing.
        assert!(!repo.delete(created.id, false).await.unwrap());
    }

    #[tokio::test]
    async fn entity_without_soft_delete_always_hard_deletes() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();

        let orgs = OrgRepo::new(uow.clone());
        let repos = Repository::<repository::Entity>::new(uow.clone());
        let packages = Repository::<package::Entity>::new(uow.clone());
        let deps = Repository::<dependency::Entity>::new(uow.clone());

        let acme = orgs.create(org("acme")).await.unwrap();
        let repo_row = repos
            .create(repository::ActiveModel {
                name: Set("widget".to_string()),
                organization_id: Set(acme.id),
                github_url: Set("https://github.com/acme/widget".to_string()),
                stars: Set(42),
                is_archived: Set(false),
                ..Default::default()
            })
            .await
            .unwrap();
        let pkg = packages
            .create(package::ActiveModel {
                name: Set("serde".to_string()),
                ecosystem: Set("crates".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let edge = deps
            .create(dependency::ActiveModel {
                repository_id: Set(repo_row.id),
                package_id: Set(pkg.id),
                version: Set(Some("1.0".to_string())),
                dependency_type: Set(Some(dependency::DependencyType::Direct)),
                ..Default::default()
            })
            .await
            .unwrap();

        // soft=true on a hard-delete-only entity falls through to a
        // permanent delete.
        assert!(deps.delete(edge.id, true).await.unwrap());
        assert!(deps.get(edge.id, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_dependency_edge_is_already_exists() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();

        let orgs = OrgRepo::new(uow.clone());
        let repos = Repository::<repository::Entity>::new(uow.clone());
        let packages = Repository::<package::Entity>::new(uow.clone());
        let deps = Repository::<dependency::Entity>::new(uow.clone());

        let acme = orgs.create(org("acme")).await.unwrap();
        let repo_row = repos
            .create(repository::ActiveModel {
                name: Set("widget".to_string()),
                organization_id: Set(acme.id),
                github_url: Set("https://github.com/acme/widget".to_string()),
                stars: Set(0),
                is_archived: Set(false),
                ..Default::default()
            })
            .await
            .unwrap();
        let pkg = packages
            .create(package::ActiveModel {
                name: Set("serde".to_string()),
                ecosystem: Set("crates".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let edge = dependency::ActiveModel {
            repository_id: Set(repo_row.id),
            package_id: Set(pkg.id),
            ..Default::default()
        };
        deps.create(edge).await.unwrap();

        let dup = dependency::ActiveModel {
            repository_id: Set(repo_row.id),
            package_id: Set(pkg.id),
            ..Default::default()
        };
        let err = deps.create(dup).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn list_pages_and_flags() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        for i in 0..5 {
            repo.create(org(&format!("org-{i}"))).await.unwrap();
        }

        let first = repo
            .list(PaginationParams::new(0, 2).unwrap(), false)
            .await
            .unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 5);
        assert!(first.has_next());
        assert!(!first.has_prev());

        let last = repo
            .list(PaginationParams::new(4, 2).unwrap(), false)
            .await
            .unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_next());
        assert!(last.has_prev());
    }

    #[tokio::test]
    async fn list_and_count_respect_soft_delete_filter() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        let doomed = repo.create(org("doomed")).await.unwrap();
        repo.create(org("alive")).await.unwrap();
        repo.delete(doomed.id, true).await.unwrap();

        let visible = repo.list(PaginationParams::default(), false).await.unwrap();
        assert_eq!(visible.total, 1);
        assert_eq!(visible.items.len(), 1);
        assert_eq!(visible.items[0].name, "alive");

        let all = repo.list(PaginationParams::default(), true).await.unwrap();
        assert_eq!(all.total, 2);

        assert_eq!(repo.count(false).await.unwrap(), 1);
        assert_eq!(repo.count(true).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn commit_makes_writes_visible_to_later_units_of_work() {
        let db = setup().await;

        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);
        let created = repo.create(org("acme")).await.unwrap();
        repo.commit().await.unwrap();

        let later = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(later);
        assert!(repo.get(created.id, false).await.unwrap().is_some());
        repo.rollback().await;
    }

    #[tokio::test]
    async fn rollback_discards_staged_writes() {
        let db = setup().await;

        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);
        let created = repo.create(org("acme")).await.unwrap();
        repo.rollback().await;

        let later = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(later);
        assert!(repo.get(created.id, false).await.unwrap().is_none());
        repo.rollback().await;
    }

    #[tokio::test]
    async fn operations_after_commit_fail() {
        let db = setup().await;
        let uow = UnitOfWork::begin(&db).await.unwrap();
        let repo = OrgRepo::new(uow);

        repo.create(org("acme")).await.unwrap();
        repo.commit().await.unwrap();

        let err = repo.create(org("late")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::OperationFailed { .. }));

        let err = repo.commit().await.unwrap_err();
        assert!(matches!(err, RepositoryError::OperationFailed { .. }));

        // Rollback after commit only logs.
        repo.rollback().await;
    }
}
