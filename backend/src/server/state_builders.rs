//! Builds the HTTP handler state from the configured adapters.

use std::sync::Arc;

use actix_web::web;

use smart_icon_backend::domain::AssetService;
use smart_icon_backend::domain::ports::{AssetRepository, ImageGenerator};
use smart_icon_backend::inbound::http::state::HttpState;

use super::ServerConfig;

/// One service instance backs both the command and the query port.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = Arc::new(AssetService::<dyn AssetRepository, dyn ImageGenerator>::new(
        config.asset_repo.clone(),
        config.generator.clone(),
    ));
    web::Data::new(HttpState::new(service.clone(), service))
}
