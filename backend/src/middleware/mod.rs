//! Request middleware.

pub mod trace;

pub use trace::{REQUEST_ID_HEADER, RequestId, RequestTracing};
