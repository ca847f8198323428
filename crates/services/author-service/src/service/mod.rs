//! Author service business logic.

mod author_service;

pub use author_service::{AuthorManager, AuthorService};
