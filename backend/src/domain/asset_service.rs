//! Asset domain service.
//!
//! Implements the asset driving ports on top of the repository and generator
//! driven ports: presence check, one generation call, then one write.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AssetRepository, AssetRepositoryError, AssetsCommand, AssetsQuery, DeleteAssetRequest,
    GenerateAssetRequest, GenerationError, ImageGenerator,
};
use crate::domain::{Asset, AssetDescription, AssetId, Error, NewAsset};

pub(crate) const DESCRIPTION_REQUIRED: &str = "Description is required";
pub(crate) const UPSTREAM_REJECTED_FALLBACK: &str = "Error from generation service";
pub(crate) const UPSTREAM_UNAVAILABLE: &str = "No response from generation service";
pub(crate) const GENERATION_FAILED: &str = "Error generating asset";
pub(crate) const SAVE_FAILED: &str = "Asset was generated but could not be saved";
pub(crate) const LIST_FAILED: &str = "Error fetching assets";
pub(crate) const DELETE_FAILED: &str = "Error deleting asset";
pub(crate) const ASSET_NOT_FOUND: &str = "Asset not found";

fn map_generation_error(error: GenerationError) -> Error {
    match error {
        GenerationError::RemoteRejected { status, message } => Error::upstream_rejected(
            status,
            message.unwrap_or_else(|| UPSTREAM_REJECTED_FALLBACK.to_owned()),
        ),
        GenerationError::RemoteUnreachable { .. } => {
            Error::upstream_unavailable(UPSTREAM_UNAVAILABLE)
        }
        GenerationError::RequestFailed { .. } => Error::generation_failed(GENERATION_FAILED),
    }
}

/// Asset service implementing both asset driving ports.
///
/// `R` and `G` may be trait objects, so the shell can inject adapters chosen
/// at runtime.
pub struct AssetService<R: ?Sized, G: ?Sized> {
    asset_repo: Arc<R>,
    generator: Arc<G>,
}

impl<R: ?Sized, G: ?Sized> Clone for AssetService<R, G> {
    fn clone(&self) -> Self {
        Self {
            asset_repo: Arc::clone(&self.asset_repo),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: ?Sized, G: ?Sized> AssetService<R, G> {
    /// Create a new service from its repository and generator.
    pub const fn new(asset_repo: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            asset_repo,
            generator,
        }
    }
}

impl<R, G> AssetService<R, G>
where
    R: AssetRepository + ?Sized,
    G: ?Sized,
{
    async fn find_existing(&self, asset_id: &AssetId) -> Result<Option<Asset>, Error> {
        self.asset_repo
            .find_by_id(asset_id)
            .await
            .map_err(|err| log_delete_failure(asset_id, &err))
    }
}

fn log_delete_failure(asset_id: &AssetId, err: &AssetRepositoryError) -> Error {
    error!(asset_id = %asset_id, error = %err, "error deleting asset");
    Error::storage_failure(DELETE_FAILED)
}

#[async_trait]
impl<R, G> AssetsCommand for AssetService<R, G>
where
    R: AssetRepository + ?Sized,
    G: ImageGenerator + ?Sized,
{
    async fn generate_asset(&self, request: GenerateAssetRequest) -> Result<Asset, Error> {
        let description = request
            .description
            .ok_or_else(|| Error::invalid_request(DESCRIPTION_REQUIRED))
            .and_then(|raw| {
                AssetDescription::new(raw).map_err(|_| Error::invalid_request(DESCRIPTION_REQUIRED))
            })?;

        let image_url = self
            .generator
            .generate(&description)
            .await
            .map_err(|err| {
                warn!(description = %description, error = %err, "error generating asset");
                map_generation_error(err)
            })?;

        let draft = NewAsset {
            description,
            image_url,
        };
        let asset = self
            .asset_repo
            .create(&draft)
            .await
            .map_err(|err| {
                error!(
                    description = %draft.description,
                    image_url = %draft.image_url,
                    error = %err,
                    "generated asset could not be saved"
                );
                Error::storage_failure(SAVE_FAILED)
            })?;

        info!(asset_id = %asset.id(), "asset generated");
        Ok(asset)
    }

    async fn delete_asset(&self, request: DeleteAssetRequest) -> Result<(), Error> {
        // A malformed id can never match a stored record.
        let Ok(asset_id) = request.asset_id.parse::<AssetId>() else {
            return Err(Error::not_found(ASSET_NOT_FOUND));
        };

        if self.find_existing(&asset_id).await?.is_none() {
            return Err(Error::not_found(ASSET_NOT_FOUND));
        }

        let removed = self
            .asset_repo
            .delete_by_id(&asset_id)
            .await
            .map_err(|err| log_delete_failure(&asset_id, &err))?;
        if !removed {
            return Err(Error::not_found(ASSET_NOT_FOUND));
        }

        info!(asset_id = %asset_id, "asset removed");
        Ok(())
    }
}

#[async_trait]
impl<R, G> AssetsQuery for AssetService<R, G>
where
    R: AssetRepository + ?Sized,
    G: ImageGenerator + ?Sized,
{
    async fn list_assets(&self) -> Result<Vec<Asset>, Error> {
        self.asset_repo.list_all().await.map_err(|err| {
            error!(error = %err, "error fetching assets");
            Error::storage_failure(LIST_FAILED)
        })
    }
}

#[cfg(test)]
#[path = "asset_service_tests.rs"]
mod tests;
