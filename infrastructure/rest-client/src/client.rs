use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::errors::ServiceError;
use business::domain::product::value_objects::ProductId;

/// Shared HTTP client configuration for the product API.
pub struct ProductApiClient {
    pub client: Client,
    base_url: Url,
}

impl ProductApiClient {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ServiceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns the product collection endpoint URL.
    pub fn products_url(&self) -> Url {
        self.endpoint(&["api", "products"])
    }

    /// Returns the endpoint URL of a single product. The id is
    /// percent-encoded as one path segment.
    pub fn product_url(&self, id: &ProductId) -> Url {
        self.endpoint(&["api", "products", id.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
