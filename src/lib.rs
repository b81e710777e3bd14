//! # Wump
//!
//! Backend for tracking GitHub organizations, their repositories, the
//! packages those repositories depend on, and the dependency edges between
//! them.
//!
//! ## Architecture
//!
//! - **domain**: error taxonomy and pagination value objects
//! - **infrastructure**: database connection, entities, migrations and the
//!   generic repository layer
//! - **interfaces**: REST API with Swagger documentation

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
