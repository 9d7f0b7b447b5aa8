//! Driving port for asset mutations.
//!
//! Inbound adapters hand over raw request values; the service behind this
//! port owns presence checks, the generation call, and persistence.

use async_trait::async_trait;

use crate::domain::{Asset, Error};

/// Request to generate and store a new asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateAssetRequest {
    /// Description as received; `None` when the field was absent or null.
    pub description: Option<String>,
}

/// Request to delete one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAssetRequest {
    /// Identifier as received from the request path.
    pub asset_id: String,
}

/// Port for generating and deleting assets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetsCommand: Send + Sync {
    /// Generate an image for the description and store the resulting asset.
    async fn generate_asset(&self, request: GenerateAssetRequest) -> Result<Asset, Error>;

    /// Delete an existing asset; missing assets yield a not-found error.
    async fn delete_asset(&self, request: DeleteAssetRequest) -> Result<(), Error>;
}
