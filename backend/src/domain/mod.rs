//! Domain primitives, services, and ports.
//!
//! Purpose: define the asset entity, its validated building blocks, and the
//! service that drives generation and persistence through the ports in
//! [`ports`]. Nothing in here knows about HTTP, SQL, or the remote provider's
//! wire format.
//!
//! Public surface:
//! - `Asset`, `NewAsset`, `AssetId`, `AssetDescription`, `ImageUrl`.
//! - `AssetService`, implementing the driving ports.
//! - `Error` and `ErrorCode`, the transport-agnostic failure payload.

pub mod asset;
mod asset_service;
pub mod error;
pub mod ports;

pub use self::asset::{Asset, AssetDescription, AssetId, AssetValidationError, ImageUrl, NewAsset};
pub use self::asset_service::AssetService;
pub use self::error::{Error, ErrorCode};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use smart_icon_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Asset not found"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
