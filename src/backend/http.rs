use crate::backend::traits::{AnalysisBackend, AnalysisError, Outcome};
use crate::config::ClientConfig;
use crate::types::{AnalysisRequest, AnalysisResult, ErrorBody};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Where the analysis service listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// Talks to the analysis service over HTTP.
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> reqwest::Result<Self> {
        // No timeout: a request runs until the service answers or the connection drops.
        let mut builder = Client::builder().timeout(None::<Duration>);
        if config.is_loopback() {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisBackend for HttpBackend {
    fn analyze(&self, request: &AnalysisRequest) -> Outcome {
        debug!(endpoint = %self.endpoint, chars = request.text.chars().count(), "posting analysis request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "analysis service unreachable");
                AnalysisError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| AnalysisError::Unreachable(e.to_string()))?;

        // A body that is not JSON at all counts as no usable response
        let json: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(%status, error = %e, "non-JSON response body");
            AnalysisError::Unreachable(format!("non-JSON response ({status}): {e}"))
        })?;

        if status.is_success() {
            let result: AnalysisResult = serde_json::from_value(json).map_err(|e| {
                warn!(%status, error = %e, "undecodable verdict body");
                AnalysisError::Malformed(e.to_string())
            })?;
            info!(%status, trust_score = result.trust_score, gotchas = result.gotchas.len(), "analysis received");
            return Ok(result);
        }

        let detail = match serde_json::from_value::<ErrorBody>(json) {
            Ok(err) => err.detail_text(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        warn!(%status, %detail, "analysis rejected");

        Err(AnalysisError::Server {
            status: status.as_u16(),
            detail,
        })
    }
}
