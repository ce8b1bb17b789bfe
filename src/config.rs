//! Injected client configuration.

use crate::backend::DEFAULT_ENDPOINT;
use reqwest::Url;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config, rejecting anything that is not an http(s) URL.
    pub fn new(endpoint_url: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint_url = endpoint_url.into();
        let parsed = Url::parse(&endpoint_url).map_err(|e| ConfigError::InvalidEndpoint {
            url: endpoint_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
                url: endpoint_url,
            });
        }

        Ok(Self { endpoint_url })
    }

    /// True when the endpoint is on this machine.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        let Ok(url) = Url::parse(&self.endpoint_url) else {
            return false;
        };
        let Some(host) = url.host_str() else {
            return false;
        };
        host.eq_ignore_ascii_case("localhost")
            || host
                .trim_matches(|c: char| c == '[' || c == ']')
                .parse::<IpAddr>()
                .is_ok_and(|ip| ip.is_loopback())
    }
}
