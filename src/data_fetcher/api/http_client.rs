//! HTTP client creation for the match API

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with the given per-request timeout and a small
/// connection pool.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Handle on the match API: a pooled client plus the base URL every listing
/// URL is built from. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, AppError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(ApiClient {
            client: create_http_client_with_timeout(timeout_seconds)?,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(config.api_base(), config.http_timeout_seconds)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let client = ApiClient::new("https://api.example.com/", 10).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            api_domain: "http://localhost:9000/".to_string(),
            ..Config::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }
}
