//! Repository layer for data access.

pub mod entities;
mod author_repository;

pub use author_repository::{AuthorRepository, AuthorStore};

#[cfg(any(test, feature = "test-utils"))]
pub use author_repository::MockAuthorRepository;
