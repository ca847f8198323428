//! HTTP clients for the sibling services.

mod book_client;
mod book_content_client;
mod identity_client;

use std::time::Duration;

use common::{AppError, AppResult, HttpClientConfig};
use tracing::warn;

pub use book_client::{BookServiceClient, HttpBookClient};
pub use book_content_client::{BookContentClient, HttpBookContentClient};
pub use identity_client::{IdentityProvider, OAuthIdentityProvider};

#[cfg(any(test, feature = "test-utils"))]
pub use book_client::MockBookServiceClient;
#[cfg(any(test, feature = "test-utils"))]
pub use book_content_client::MockBookContentClient;
#[cfg(any(test, feature = "test-utils"))]
pub use identity_client::MockIdentityProvider;

/// Build the shared reqwest client with configured timeouts.
pub fn build_http_client(config: &HttpClientConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .map_err(AppError::from)
}

/// Turn a non-2xx downstream response into an upstream error.
async fn ensure_success(response: reqwest::Response, service: &str) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("{} responded with {}: {}", service, status, body);
    Err(AppError::upstream(format!(
        "{} responded with {}: {}",
        service, status, body
    )))
}

/// Append path segments to a base URL. Each segment is percent-encoded, so an
/// id containing `/`, `?` or `#` stays a single segment.
fn endpoint<I>(base: &str, segments: I) -> AppResult<reqwest::Url>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = reqwest::Url::parse(base)
        .map_err(|e| AppError::internal(format!("invalid service url {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| AppError::internal(format!("service url {} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        for base in ["http://localhost:8093/", "http://localhost:8093"] {
            assert_eq!(
                endpoint(base, ["api", "book", "createbook"]).unwrap().as_str(),
                "http://localhost:8093/api/book/createbook"
            );
        }
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let url = endpoint("http://gateway/books/", ["api", "book", "createbook"]).unwrap();
        assert_eq!(url.path(), "/books/api/book/createbook");
    }

    #[test]
    fn test_endpoint_encodes_id_as_one_segment() {
        let id = "jane#x?y/z@example.com";
        let url = endpoint("http://localhost:8093", ["api", "book", "getbyauthid", id]).unwrap();
        assert_eq!(url.path(), "/api/book/getbyauthid/jane%23x%3Fy%2Fz@example.com");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);

        let id = "../../admin";
        let url = endpoint("http://localhost:8093", ["api", "book", "getbyauthid", id]).unwrap();
        assert_eq!(url.path(), "/api/book/getbyauthid/..%2F..%2Fadmin");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        assert!(matches!(
            endpoint("not a url", ["api"]),
            Err(AppError::Internal(_))
        ));
    }

    #[test]
    fn test_build_http_client_from_defaults() {
        assert!(build_http_client(&HttpClientConfig::default()).is_ok());
    }
}
