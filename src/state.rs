//! Shared application state for all routes.

use crate::store::MovieStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: impl MovieStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
