//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::AuthorService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<dyn AuthorService>,
}

impl AppState {
    pub fn new(author_service: Arc<dyn AuthorService>) -> Self {
        Self { author_service }
    }
}
