use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::Error;

/// Base URL of the Pwned Passwords API.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

/// Ceiling for a single range request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can answer a range query for a 5 character hash prefix.
///
/// [`RangeClient`] talks to the real service; tests substitute their own.
pub trait RangeSource {
    /// Fetches the raw `SUFFIX:COUNT` body for `prefix`.
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

/// Settings for a [`RangeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Ask the service to pad responses with zero-count decoy records.
    pub add_padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("hibp-range/", env!("CARGO_PKG_VERSION")).to_string(),
            add_padding: false,
        }
    }
}

/// HTTP client for the range endpoint.
///
/// Holds one connection pool for its whole lifetime; build it once and pass
/// it to the checker. Each lookup is a single request with no retries.
#[derive(Debug, Clone)]
pub struct RangeClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    add_padding: bool,
}

impl RangeClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            add_padding: config.add_padding,
        })
    }

    /// The URL queried for `prefix`.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }

    fn transport_error(&self, prefix: &str, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout { prefix: prefix.to_string(), timeout: self.timeout }
        } else {
            Error::Network { prefix: prefix.to_string(), source }
        }
    }
}

impl RangeSource for RangeClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        let url = self.range_url(prefix);
        debug!(prefix, padding = self.add_padding, "requesting range");

        let mut request = self.client.get(&url);
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await.map_err(|e| self.transport_error(prefix, e))?;
        if !response.status().is_success() {
            return Err(Error::Service {
                prefix: prefix.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(|e| self.transport_error(prefix, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.add_padding);
        assert!(config.user_agent.starts_with("hibp-range/"));
    }

    #[test]
    fn test_range_url() {
        let client = RangeClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.range_url("5BAA6"), "https://api.pwnedpasswords.com/range/5BAA6");

        let client = RangeClient::new(ClientConfig {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.range_url("00000"), "http://127.0.0.1:8080/range/00000");
    }
}
