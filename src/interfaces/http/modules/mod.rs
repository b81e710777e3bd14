//! Request handlers per resource

pub mod dependencies;
pub mod health;
pub mod organizations;
pub mod packages;
pub mod repositories;

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

/// Shared state for all API routes
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}
