//! Asset store adapters.
//!
//! `DieselAssetRepository` persists assets in PostgreSQL through Diesel with
//! async support from `diesel-async` and `bb8` pooling. Row structs
//! (`models.rs`) and the schema (`schema.rs`) stay private to this module.
//! `InMemoryAssetRepository` keeps assets in process memory for tests.
//!
//! ```ignore
//! use smart_icon_backend::outbound::persistence::{
//!     DbPool, DieselAssetRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! run_pending_migrations(database_url).await?;
//! let pool = DbPool::new(PoolConfig::new(database_url)).await?;
//! let repo = DieselAssetRepository::new(pool);
//! ```

mod diesel_asset_repository;
mod in_memory_asset_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_asset_repository::DieselAssetRepository;
pub use in_memory_asset_repository::InMemoryAssetRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
