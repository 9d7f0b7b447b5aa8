//! Driving port for asset reads.

use async_trait::async_trait;

use crate::domain::{Asset, Error};

/// Port for listing stored assets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetsQuery: Send + Sync {
    /// Return every stored asset, newest first.
    async fn list_assets(&self) -> Result<Vec<Asset>, Error>;
}
