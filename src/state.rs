use std::sync::Arc;

use crate::service::MappingService;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MappingService>,
}

impl AppState {
    pub fn new(service: MappingService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
