use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, extract_detail};

/// HTTP client for the backend REST API.
///
/// Session cookies set by the backend are kept and sent on later requests.
#[derive(Clone)]
pub struct BackendClient {
    base_url: Url,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Base URL plus percent-encoded path segments
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and decode a JSON body, mapping non-2xx to [`ApiError`]
    pub(crate) async fn send<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Backend returned {}: {}", status, body);

            return Err(match extract_detail(&body) {
                Some(detail) => ApiError::Server {
                    status: status.as_u16(),
                    detail,
                },
                None => ApiError::Status {
                    status: status.as_u16(),
                },
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_and_encode_segments() {
        let client = BackendClient::new("http://localhost:8000").unwrap();

        assert_eq!(
            client.endpoint(&["vocabulary", "check", "don't stop"]).as_str(),
            "http://localhost:8000/vocabulary/check/don't%20stop"
        );
        assert_eq!(
            client.endpoint(&["auth", ""]).as_str(),
            "http://localhost:8000/auth/"
        );
    }

    #[test]
    fn endpoints_keep_base_path() {
        let client = BackendClient::new("https://example.com/api/").unwrap();
        assert_eq!(
            client.endpoint(&["youtube", "trending"]).as_str(),
            "https://example.com/api/youtube/trending"
        );
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(matches!(
            BackendClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            BackendClient::new("localhost"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
