//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum author name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

// =============================================================================
// Authentication
// =============================================================================

/// OAuth2 grant used against the identity provider
pub const GRANT_TYPE_PASSWORD: &str = "password";

/// Field of the identity provider token map holding the token
pub const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Token type reported to API clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Status messages
// =============================================================================

pub const MSG_AUTHOR_REGISTERED: &str = "Author registered successfully";

pub const MSG_AUTHOR_DELETED: &str = "Author deleted successfully";

pub const MSG_AUTHOR_APPROVED: &str = "Author authorized";
