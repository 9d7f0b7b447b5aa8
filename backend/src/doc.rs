//! OpenAPI document for the asset API.
//!
//! Served through Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::assets::{
    AssetResponseBody, GenerateAssetRequestBody, MessageResponseBody,
};
use crate::inbound::http::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart icon backend API",
        description = "Generate icon and sticker images from text descriptions and manage the stored results."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::assets::generate_asset,
        crate::inbound::http::assets::list_assets,
        crate::inbound::http::assets::delete_asset,
        crate::inbound::http::root::banner,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        GenerateAssetRequestBody,
        AssetResponseBody,
        MessageResponseBody,
        ErrorBody
    )),
    tags(
        (name = "assets", description = "Generated icon and sticker assets"),
        (name = "health", description = "Banner and health probes")
    )
)]
pub struct ApiDoc;
