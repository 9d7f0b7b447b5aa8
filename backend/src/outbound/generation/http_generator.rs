//! Reqwest-backed text-to-image adapter.
//!
//! This adapter owns transport details only: request serialisation, the
//! API key header, timeout handling, and classification of every failure into
//! a `GenerationError` variant before it reaches the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{GenerationErrorDto, GenerationRequestDto, GenerationResponseDto};
use crate::domain::ports::{GenerationError, ImageGenerator};
use crate::domain::{AssetDescription, ImageUrl};

const API_KEY_HEADER: &str = "Api-Key";

/// Generator adapter that performs one HTTP POST per description.
pub struct HttpImageGenerator {
    client: Client,
    endpoint: Url,
    api_key: Zeroizing<String>,
}

impl std::fmt::Debug for HttpImageGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageGenerator")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpImageGenerator {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let generator = HttpImageGenerator::new(endpoint, api_key, timeout)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: Zeroizing::new(api_key.into()),
        })
    }

    fn api_key_header(&self) -> Result<HeaderValue, GenerationError> {
        let mut value = HeaderValue::from_str(self.api_key.as_str()).map_err(|_| {
            GenerationError::request_failed("API key contains characters not allowed in a header")
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, description: &AssetDescription) -> Result<ImageUrl, GenerationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, self.api_key_header()?)
            .header(ACCEPT, "application/json")
            .json(&GenerationRequestDto {
                text: description.as_str(),
            })
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| GenerationError::remote_unreachable(error.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "generation response received");

        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_image_url(body.as_ref())
    }
}

fn map_send_error(error: reqwest::Error) -> GenerationError {
    if error.is_timeout() || error.is_connect() || error.is_request() {
        GenerationError::remote_unreachable(error.to_string())
    } else {
        GenerationError::request_failed(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GenerationError {
    let message = serde_json::from_slice::<GenerationErrorDto>(body)
        .ok()
        .and_then(|dto| dto.error)
        .filter(|message| !message.is_empty());
    GenerationError::RemoteRejected {
        status: status.as_u16(),
        message,
    }
}

fn parse_image_url(body: &[u8]) -> Result<ImageUrl, GenerationError> {
    let decoded: GenerationResponseDto = serde_json::from_slice(body).map_err(|error| {
        GenerationError::request_failed(format!("invalid generation response payload: {error}"))
    })?;
    let raw = decoded
        .output_url
        .ok_or_else(|| GenerationError::request_failed("generation response missing output_url"))?;
    ImageUrl::new(raw)
        .map_err(|_| GenerationError::request_failed("generation response has empty output_url"))
}
