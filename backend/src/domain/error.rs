//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or a required field is missing.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The generation service answered with an error response.
    UpstreamRejected,
    /// The generation service never answered.
    UpstreamUnavailable,
    /// The generation call failed locally or returned an unusable body.
    GenerationFailed,
    /// The backing store failed to read or write.
    StorageFailure,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// `upstream_status` is only set for [`ErrorCode::UpstreamRejected`] and
/// carries the status code reported by the generation service.
///
/// # Examples
/// ```
/// use smart_icon_backend::domain::{Error, ErrorCode};
///
/// let err = Error::upstream_rejected(402, "quota exceeded");
/// assert_eq!(err.code(), ErrorCode::UpstreamRejected);
/// assert_eq!(err.upstream_status(), Some(402));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    upstream_status: Option<u16>,
}

impl Error {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            upstream_status: None,
        }
    }

    /// Stable machine-readable error code.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Status reported by the generation service, if it rejected the call.
    pub const fn upstream_status(&self) -> Option<u16> {
        self.upstream_status
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::UpstreamRejected`].
    pub fn upstream_rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            upstream_status: Some(status),
            ..Self::new(ErrorCode::UpstreamRejected, message)
        }
    }

    /// Convenience constructor for [`ErrorCode::UpstreamUnavailable`].
    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::GenerationFailed`].
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageFailure`].
    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFailure, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::not_found("missing"), ErrorCode::NotFound)]
    #[case(Error::upstream_unavailable("silent"), ErrorCode::UpstreamUnavailable)]
    #[case(Error::generation_failed("broken"), ErrorCode::GenerationFailed)]
    #[case(Error::storage_failure("db down"), ErrorCode::StorageFailure)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code_without_upstream_status(
        #[case] error: Error,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(error.code(), expected);
        assert_eq!(error.upstream_status(), None);
    }

    #[rstest]
    fn upstream_rejected_keeps_status_and_message() {
        let error = Error::upstream_rejected(429, "slow down");
        assert_eq!(error.upstream_status(), Some(429));
        assert_eq!(error.message(), "slow down");
        assert_eq!(error.to_string(), "slow down");
    }

    #[rstest]
    fn error_code_serialises_as_snake_case() {
        let json = serde_json::to_string(&ErrorCode::UpstreamRejected).expect("serialise code");
        assert_eq!(json, "\"upstream_rejected\"");
    }
}
