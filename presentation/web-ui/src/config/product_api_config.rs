use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Where the external product API lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductApiConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ProductApiConfig {
    /// Environment variables:
    /// - PRODUCT_API_URL: Base URL of the product API (default: "http://localhost:5001")
    /// - PRODUCT_API_TIMEOUT_SECS: Request timeout in seconds (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("PRODUCT_API_URL").ok(),
            env::var("PRODUCT_API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = timeout_secs
            .map(|secs| {
                secs.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("PRODUCT_API_TIMEOUT_SECS is not a number: {secs}"))
            })
            .transpose()?;

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_product_api_without_timeout() {
        let config = ProductApiConfig::from_values(None, None).unwrap();

        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn should_read_base_url_and_timeout() {
        let config = ProductApiConfig::from_values(
            Some("https://shop.example.com".to_string()),
            Some("15".to_string()),
        )
        .unwrap();

        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn should_fall_back_to_default_for_blank_url() {
        let config = ProductApiConfig::from_values(Some("  ".to_string()), None).unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn should_reject_non_numeric_timeout() {
        let result = ProductApiConfig::from_values(None, Some("soon".to_string()));

        assert!(result.is_err());
    }
}
