//! Asset entity and its value types.
//!
//! An asset pairs the caller's description with the image URL returned by
//! the generation service. Assets are immutable once stored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Validation errors raised by the asset value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetValidationError {
    /// The description was empty.
    #[error("description must not be empty")]
    EmptyDescription,
    /// The image URL was empty.
    #[error("image url must not be empty")]
    EmptyImageUrl,
    /// The identifier was not a UUID.
    #[error("asset id must be a valid UUID")]
    InvalidId,
}

/// Store-assigned asset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AssetId {
    type Err = AssetValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AssetValidationError::InvalidId)
    }
}

/// Caller-supplied text describing the image to generate.
///
/// Only presence is enforced: any non-empty text is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescription(String);

impl AssetDescription {
    /// Validate and construct a description.
    ///
    /// # Examples
    /// ```
    /// use smart_icon_backend::domain::AssetDescription;
    ///
    /// assert!(AssetDescription::new("a smiling cactus").is_ok());
    /// assert!(AssetDescription::new("").is_err());
    /// ```
    pub fn new(description: impl Into<String>) -> Result<Self, AssetValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(AssetValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }

    /// Borrow the description text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AssetDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssetDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a generated image, as returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validate and construct an image URL.
    pub fn new(url: impl Into<String>) -> Result<Self, AssetValidationError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(AssetValidationError::EmptyImageUrl);
        }
        Ok(Self(url))
    }

    /// Borrow the URL text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Write model handed to the store; identity and timestamp are assigned there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub description: AssetDescription,
    pub image_url: ImageUrl,
}

/// A persisted asset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    id: AssetId,
    description: AssetDescription,
    image_url: ImageUrl,
    created_at: DateTime<Utc>,
}

impl Asset {
    /// Assemble a stored asset from its parts.
    pub const fn new(
        id: AssetId,
        description: AssetDescription,
        image_url: ImageUrl,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description,
            image_url,
            created_at,
        }
    }

    /// Build the stored form of `draft` with the given identity and timestamp.
    pub fn from_new(id: AssetId, draft: NewAsset, created_at: DateTime<Utc>) -> Self {
        let NewAsset {
            description,
            image_url,
        } = draft;
        Self::new(id, description, image_url, created_at)
    }

    pub const fn id(&self) -> AssetId {
        self.id
    }

    pub const fn description(&self) -> &AssetDescription {
        &self.description
    }

    pub const fn image_url(&self) -> &ImageUrl {
        &self.image_url
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
