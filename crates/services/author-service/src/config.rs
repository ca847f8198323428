//! Author service configuration.

use std::env;

use common::{DatabaseConfig, HttpClientConfig};

/// Identity provider password-grant settings.
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    /// OAuth2 token endpoint
    pub token_url: String,
    pub client_id: String,
    pub username: String,
    pub password: String,
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            token_url: "http://localhost:8080/realms/api-gateway-realm/protocol/openid-connect/token"
                .to_string(),
            client_id: "user_api".to_string(),
            username: "user".to_string(),
            password: "user01".to_string(),
        }
    }
}

/// Author service configuration.
#[derive(Debug, Clone)]
pub struct AuthorServiceConfig {
    pub database: DatabaseConfig,
    pub http_client: HttpClientConfig,
    /// Book service base URL
    pub book_service_url: String,
    /// Book-content service base URL
    pub book_content_service_url: String,
    pub identity: IdentityProviderConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl AuthorServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("AUTHOR_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parse_env("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parse_env("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
            http_client: HttpClientConfig {
                connect_timeout_ms: parse_env("HTTP_CONNECT_TIMEOUT_MS")
                    .unwrap_or(defaults.http_client.connect_timeout_ms),
                request_timeout_ms: parse_env("HTTP_REQUEST_TIMEOUT_MS")
                    .unwrap_or(defaults.http_client.request_timeout_ms),
            },
            book_service_url: env::var("BOOK_SERVICE_URL").unwrap_or(defaults.book_service_url),
            book_content_service_url: env::var("BOOK_CONTENT_SERVICE_URL")
                .unwrap_or(defaults.book_content_service_url),
            identity: IdentityProviderConfig {
                token_url: env::var("IDENTITY_TOKEN_URL").unwrap_or(defaults.identity.token_url),
                client_id: env::var("IDENTITY_CLIENT_ID").unwrap_or(defaults.identity.client_id),
                username: env::var("IDENTITY_USERNAME").unwrap_or(defaults.identity.username),
                password: env::var("IDENTITY_PASSWORD").unwrap_or(defaults.identity.password),
            },
            host: env::var("AUTHOR_SERVICE_HOST").unwrap_or(defaults.host),
            port: parse_env("AUTHOR_SERVICE_PORT").unwrap_or(defaults.port),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Default for AuthorServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            http_client: HttpClientConfig::default(),
            book_service_url: "http://localhost:8093".to_string(),
            book_content_service_url: "http://localhost:8094".to_string(),
            identity: IdentityProviderConfig::default(),
            host: "0.0.0.0".to_string(),
            port: 8092,
        }
    }
}
