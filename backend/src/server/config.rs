//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use smart_icon_backend::domain::ports::{AssetRepository, ImageGenerator};

/// Everything the server needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) asset_repo: Arc<dyn AssetRepository>,
    pub(crate) generator: Arc<dyn ImageGenerator>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        asset_repo: Arc<dyn AssetRepository>,
        generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            bind_addr,
            asset_repo,
            generator,
        }
    }
}
