//! Wire shapes exchanged with the text-to-image provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GenerationRequestDto<'a> {
    pub(super) text: &'a str,
}

/// Success body. Providers add job metadata alongside the URL; it is ignored.
#[derive(Debug, Deserialize)]
pub(super) struct GenerationResponseDto {
    pub(super) output_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerationErrorDto {
    pub(super) error: Option<String>,
}
