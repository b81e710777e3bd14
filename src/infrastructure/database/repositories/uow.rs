//! Unit of work - the transactional scope repositories operate in
//!
//! A `UnitOfWork` wraps one open `DatabaseTransaction`. The caller (route
//! handler) opens it, hands clones of the handle to the repositories it
//! builds, and decides commit vs rollback. Repositories borrow the
//! transaction per operation and never close it themselves.
//!
//! The lifecycle is `open -> (committed | rolled back)`, terminal either
//! way. Operations on a closed unit of work fail with `OperationFailed`.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error};

use crate::domain::error::{RepositoryError, RepositoryResult};

/// Cloneable handle to one open database transaction.
///
/// Operations serialize on an internal mutex: a unit of work belongs to one
/// logical caller, and concurrent callers must each begin their own.
///
/// Dropping the last handle without committing rolls the transaction back,
/// so read-only callers may simply let it go out of scope.
#[derive(Clone)]
pub struct UnitOfWork {
    txn: Arc<Mutex<Option<DatabaseTransaction>>>,
}

impl UnitOfWork {
    /// Open a new transaction on the given connection.
    pub async fn begin(db: &DatabaseConnection) -> RepositoryResult<Self> {
        let txn = db.begin().await.map_err(|e| RepositoryError::OperationFailed {
            entity: "transaction",
            operation: "begin",
            source: e,
        })?;
        Ok(Self {
            txn: Arc::new(Mutex::new(Some(txn))),
        })
    }

    /// Lock the transaction slot for the duration of one operation.
    pub(crate) async fn slot(&self) -> MutexGuard<'_, Option<DatabaseTransaction>> {
        self.txn.lock().await
    }

    /// Commit the transaction, making all staged writes durable.
    ///
    /// Fails with `OperationFailed` if the store rejects the commit or the
    /// unit of work is already closed.
    pub async fn commit(&self) -> RepositoryResult<()> {
        let txn = self
            .txn
            .lock()
            .await
            .take()
            .ok_or_else(|| RepositoryError::closed("transaction", "commit"))?;
        txn.commit()
            .await
            .map_err(|e| RepositoryError::OperationFailed {
                entity: "transaction",
                operation: "commit",
                source: e,
            })?;
        debug!("transaction committed");
        Ok(())
    }

    /// Roll back the transaction, discarding staged writes.
    ///
    /// Best-effort: rollback usually runs inside an error-handling path, so
    /// failures (and rolling back an already-closed unit of work) are
    /// logged and swallowed rather than masking the original error.
    pub async fn rollback(&self) {
        let Some(txn) = self.txn.lock().await.take() else {
            debug!("rollback on closed unit of work ignored");
            return;
        };
        if let Err(e) = txn.rollback().await {
            error!(error = %e, "transaction rollback failed");
        } else {
            debug!("transaction rolled back");
        }
    }
}

/// Borrow the open transaction out of a locked slot, failing with
/// `OperationFailed` when the unit of work is closed.
pub(crate) fn active<'a>(
    slot: &'a Option<DatabaseTransaction>,
    entity: &'static str,
    operation: &'static str,
) -> RepositoryResult<&'a DatabaseTransaction> {
    slot.as_ref()
        .ok_or_else(|| RepositoryError::closed(entity, operation))
}
