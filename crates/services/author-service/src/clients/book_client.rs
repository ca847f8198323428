//! HTTP client for the book service.

use async_trait::async_trait;
use tracing::debug;

use common::AppResult;
use domain::Book;

use super::{endpoint, ensure_success};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const SERVICE: &str = "book service";

/// Book service operations used by the author service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookServiceClient: Send + Sync {
    /// Create a book; returns the book service's status message
    async fn create_book(&self, book: &Book) -> AppResult<String>;

    /// Mark a book complete; returns the book service's status message
    async fn set_complete(&self, book_id: &str) -> AppResult<String>;

    /// List the books owned by an author
    async fn books_by_author(&self, author_id: &str) -> AppResult<Vec<Book>>;
}

/// reqwest implementation of [`BookServiceClient`].
pub struct HttpBookClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BookServiceClient for HttpBookClient {
    async fn create_book(&self, book: &Book) -> AppResult<String> {
        let url = endpoint(&self.base_url, ["api", "book", "createbook"])?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(book).send().await?;
        let response = ensure_success(response, SERVICE).await?;
        Ok(response.text().await?)
    }

    async fn set_complete(&self, book_id: &str) -> AppResult<String> {
        let url = endpoint(&self.base_url, ["api", "book", "setcomplete", book_id])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, SERVICE).await?;
        Ok(response.text().await?)
    }

    async fn books_by_author(&self, author_id: &str) -> AppResult<Vec<Book>> {
        let url = endpoint(&self.base_url, ["api", "book", "getbyauthid", author_id])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, SERVICE).await?;
        Ok(response.json::<Vec<Book>>().await?)
    }
}
