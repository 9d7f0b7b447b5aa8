//! Driven port for the remote text-to-image service.
//!
//! The adapter classifies every failure at the call boundary so the domain
//! never has to inspect transport error shapes.

use async_trait::async_trait;

use crate::domain::{AssetDescription, ImageUrl};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the generation service.
    pub enum GenerationError {
        /// The service answered with a non-success status.
        RemoteRejected { status: u16, message: Option<String> } =>
            "generation service rejected the request with status {status}",
        /// The request was sent but no response arrived.
        RemoteUnreachable { message: String } =>
            "generation service unreachable: {message}",
        /// The request could not be built or sent, or the reply was unusable.
        RequestFailed { message: String } =>
            "generation request failed: {message}",
    }
}

/// Port for turning a description into a generated image reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for `description` and return its URL.
    ///
    /// Each call makes exactly one attempt.
    async fn generate(&self, description: &AssetDescription) -> Result<ImageUrl, GenerationError>;
}
