//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling mapped onto HTTP responses
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
