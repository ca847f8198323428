//! OAuth2 identity provider client.
//!
//! Exchanges the configured service credentials for an access token using the
//! password grant. Tokens are neither cached nor refreshed.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{ACCESS_TOKEN_FIELD, GRANT_TYPE_PASSWORD};

use super::ensure_success;
use crate::config::IdentityProviderConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Request a fresh access token
    async fn request_token(&self) -> AppResult<String>;
}

/// Password-grant client for an OpenID Connect token endpoint.
pub struct OAuthIdentityProvider {
    client: reqwest::Client,
    config: IdentityProviderConfig,
}

impl OAuthIdentityProvider {
    pub fn new(client: reqwest::Client, config: IdentityProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl IdentityProvider for OAuthIdentityProvider {
    async fn request_token(&self) -> AppResult<String> {
        let params = [
            ("grant_type", GRANT_TYPE_PASSWORD),
            ("client_id", self.config.client_id.as_str()),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.as_str()),
        ];
        debug!("Requesting token from {}", self.config.token_url);

        let response = self
            .client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;
        let response = ensure_success(response, "identity provider").await?;

        let token_map: HashMap<String, Value> = response.json().await?;

        token_map
            .get(ACCESS_TOKEN_FIELD)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AppError::upstream("identity provider response has no access_token"))
    }
}
