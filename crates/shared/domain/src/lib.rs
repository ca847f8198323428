//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the author aggregate, the externally owned book record, login credentials
//! and the password value object.

pub mod author;
pub mod book;
pub mod constants;
pub mod error;
pub mod password;

pub use author::{Author, AuthorResponse, LoginCredentials};
pub use book::Book;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
