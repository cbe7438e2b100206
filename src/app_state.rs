//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DirectoryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory service for every venue, artist and show operation.
    pub service: Arc<DirectoryService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(service: DirectoryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
