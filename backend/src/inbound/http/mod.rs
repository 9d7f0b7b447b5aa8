//! HTTP inbound adapter exposing the asset REST endpoints.

pub mod assets;
pub mod error;
pub mod health;
pub mod root;
pub mod state;

use actix_web::web;
use tracing::warn;

use crate::domain::Error;

pub use error::{ApiResult, ErrorBody};

/// Largest accepted JSON request body.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Register the banner, health probes, and asset routes.
///
/// Callers provide `web::Data<HttpState>` and `web::Data<HealthState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(root::banner)
        .service(health::ready)
        .service(health::live)
        .service(
            web::scope("/api/assets")
                .service(assets::generate_asset)
                .service(assets::delete_asset)
                .service(web::resource(vec!["", "/"]).route(web::get().to(assets::list_assets))),
        );
}

/// JSON extractor policy: bodies that fail to decode become a 400 with the
/// usual `{ "error": ... }` payload instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            warn!(error = %err, "rejected request body");
            Error::invalid_request("Invalid JSON body").into()
        })
}
