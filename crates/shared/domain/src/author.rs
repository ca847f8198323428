//! Author domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_NAME_LENGTH;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Author domain entity, keyed by email.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    /// Approval flag gating book publication
    pub is_authorised: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new, not yet authorised author.
    pub fn new(email: String, name: String, password: Password) -> DomainResult<Self> {
        validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            email,
            name,
            password_hash: password.into_string(),
            is_authorised: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Stored password hash as a value object.
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.as_str())
    }

    /// Replace display name and password. The approval flag is untouched.
    pub fn update_profile(&mut self, name: String, password: Password) -> DomainResult<()> {
        validate_name(&name)?;

        self.name = name;
        self.password_hash = password.into_string();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Grant permission to publish books.
    pub fn approve(&mut self) {
        self.is_authorised = true;
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(DomainError::validation("Author name cannot be empty"));
    }
    Ok(())
}

/// Author view returned to clients (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthorResponse {
    /// Author email, also the identifier
    pub email: String,
    /// Display name
    pub name: String,
    /// Whether the author may publish books
    pub is_authorised: bool,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            email: author.email,
            name: author.name,
            is_authorised: author.is_authorised,
            created_at: author.created_at,
        }
    }
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            email: author.email.clone(),
            name: author.name.clone(),
            is_authorised: author.is_authorised,
            created_at: author.created_at,
        }
    }
}

/// Login credentials. Never persisted.
#[derive(Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
