//! HTTP request handlers.

pub mod author_handler;
pub mod book_handler;
pub mod health_handler;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use author_handler::author_routes;
pub use book_handler::book_routes;
pub use health_handler::health_routes;

/// Status message response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Author registered successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
