//! Text-to-image outbound adapters.
//!
//! This module provides the reqwest implementation of the `ImageGenerator`
//! port.

mod dto;
mod http_generator;

pub use http_generator::HttpImageGenerator;
