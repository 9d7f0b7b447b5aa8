//! Shared HTTP adapter state.
//!
//! Handlers take this via `web::Data` so they depend on the driving ports
//! only and can be tested without I/O.

use std::sync::Arc;

use crate::domain::ports::{AssetsCommand, AssetsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub assets: Arc<dyn AssetsCommand>,
    pub assets_query: Arc<dyn AssetsQuery>,
}

impl HttpState {
    pub fn new(assets: Arc<dyn AssetsCommand>, assets_query: Arc<dyn AssetsQuery>) -> Self {
        Self {
            assets,
            assets_query,
        }
    }
}
