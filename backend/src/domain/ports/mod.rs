//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`AssetsCommand`, `AssetsQuery`) are called by inbound
//! adapters. Driven ports (`AssetRepository`, `ImageGenerator`) are
//! implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod asset_repository;
mod assets_command;
mod assets_query;
mod image_generator;

#[cfg(test)]
pub use asset_repository::MockAssetRepository;
pub use asset_repository::{AssetRepository, AssetRepositoryError};
#[cfg(test)]
pub use assets_command::MockAssetsCommand;
pub use assets_command::{AssetsCommand, DeleteAssetRequest, GenerateAssetRequest};
#[cfg(test)]
pub use assets_query::MockAssetsQuery;
pub use assets_query::AssetsQuery;
#[cfg(test)]
pub use image_generator::MockImageGenerator;
pub use image_generator::{GenerationError, ImageGenerator};
