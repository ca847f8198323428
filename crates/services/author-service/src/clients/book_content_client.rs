//! HTTP client for the book-content service.

use async_trait::async_trait;
use tracing::debug;

use common::AppResult;

use super::{endpoint, ensure_success};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookContentClient: Send + Sync {
    /// Whether the book has valid, non-empty content
    async fn validate_content(&self, book_id: &str) -> AppResult<bool>;
}

/// reqwest implementation of [`BookContentClient`].
pub struct HttpBookContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookContentClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BookContentClient for HttpBookContentClient {
    async fn validate_content(&self, book_id: &str) -> AppResult<bool> {
        let url = endpoint(&self.base_url, ["api", "bookcontent", "validcontent", book_id])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, "book-content service").await?;
        Ok(response.json::<bool>().await?)
    }
}
