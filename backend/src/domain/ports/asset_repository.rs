//! Driven port for asset persistence.

use async_trait::async_trait;

use crate::domain::{Asset, AssetId, NewAsset};

use super::define_port_error;

define_port_error! {
    /// Errors raised by asset repository adapters.
    pub enum AssetRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "asset repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "asset repository query failed: {message}",
    }
}

/// Port for storing, listing, and removing asset records.
///
/// Adapters assign the identifier and creation timestamp on `create`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Persist a new asset and return the stored record.
    async fn create(&self, asset: &NewAsset) -> Result<Asset, AssetRepositoryError>;

    /// Return every asset, newest first.
    async fn list_all(&self) -> Result<Vec<Asset>, AssetRepositoryError>;

    /// Find an asset by id.
    async fn find_by_id(&self, id: &AssetId) -> Result<Option<Asset>, AssetRepositoryError>;

    /// Remove an asset by id, returning `false` when nothing matched.
    async fn delete_by_id(&self, id: &AssetId) -> Result<bool, AssetRepositoryError>;
}
