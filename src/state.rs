//! Shared application state for all routes. Immutable after startup.

use crate::service::Catalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(catalog: impl Catalog + 'static) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}
