//! Asset HTTP handlers.
//!
//! ```text
//! POST   /api/assets/generate
//! GET    /api/assets
//! DELETE /api/assets/{id}
//! ```

use actix_web::{HttpResponse, delete, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Asset;
use crate::domain::ports::{DeleteAssetRequest, GenerateAssetRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for generating an asset.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct GenerateAssetRequestBody {
    /// Text sent to the generation service. Required and non-empty.
    #[schema(example = "a smiling cactus sticker")]
    pub description: Option<String>,
}

/// Stored asset as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub description: String,
    #[schema(format = "uri")]
    pub image_url: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

/// Confirmation payload for deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponseBody {
    #[schema(example = "Asset removed")]
    pub message: String,
}

impl From<&Asset> for AssetResponseBody {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id().to_string(),
            description: asset.description().as_str().to_owned(),
            image_url: asset.image_url().as_str().to_owned(),
            created_at: asset.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Generate an image for the description and store it as a new asset.
#[utoipa::path(
    post,
    path = "/api/assets/generate",
    request_body = GenerateAssetRequestBody,
    responses(
        (status = 201, description = "Asset generated and stored", body = AssetResponseBody),
        (status = 400, description = "Description missing or body malformed", body = ErrorBody),
        (status = "4XX", description = "Rejection forwarded from the generation service", body = ErrorBody),
        (status = 500, description = "Generation or storage failed", body = ErrorBody),
        (status = 502, description = "Generation service answered with a non-error status", body = ErrorBody)
    ),
    tags = ["assets"],
    operation_id = "generateAsset"
)]
#[post("/generate")]
pub async fn generate_asset(
    state: web::Data<HttpState>,
    payload: web::Json<GenerateAssetRequestBody>,
) -> ApiResult<HttpResponse> {
    let GenerateAssetRequestBody { description } = payload.into_inner();
    let asset = state
        .assets
        .generate_asset(GenerateAssetRequest { description })
        .await?;

    Ok(HttpResponse::Created().json(AssetResponseBody::from(&asset)))
}

/// List every stored asset, newest first.
///
/// Registered through [`crate::inbound::http::configure`] on both
/// `/api/assets` and `/api/assets/`.
#[utoipa::path(
    get,
    path = "/api/assets",
    responses(
        (status = 200, description = "Stored assets, newest first", body = [AssetResponseBody]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["assets"],
    operation_id = "listAssets"
)]
pub async fn list_assets(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AssetResponseBody>>> {
    let assets = state.assets_query.list_assets().await?;
    Ok(web::Json(assets.iter().map(AssetResponseBody::from).collect()))
}

/// Delete one asset by id.
#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(("id" = String, Path, description = "Asset identifier")),
    responses(
        (status = 200, description = "Asset removed", body = MessageResponseBody),
        (status = 404, description = "No asset with this id", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    ),
    tags = ["assets"],
    operation_id = "deleteAsset"
)]
#[delete("/{id}")]
pub async fn delete_asset(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponseBody>> {
    state
        .assets
        .delete_asset(DeleteAssetRequest {
            asset_id: path.into_inner(),
        })
        .await?;

    Ok(web::Json(MessageResponseBody {
        message: "Asset removed".to_owned(),
    }))
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
