//! HTTP client for the upstream collection service.
//!
//! Thin wrapper over `reqwest`: the storefront forwards status, body and
//! content type verbatim and never interprets the payload.

use std::time::Duration;

use crate::config::ServerConfig;

/// Errors produced while talking to the collection service.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("upstream request failed: {0}")]
    Request(String),
}

/// Status, content type and raw body returned by the collection service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
}

impl Upstream {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ServerConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.upstream_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request to an absolute upstream `url`.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Request`] if no response arrives.
    pub async fn send(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<UpstreamReply, UpstreamError> {
        let request = self.http.request(method, url);
        let request = if let Some(json) = body { request.json(json) } else { request };

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        Ok(UpstreamReply { status, content_type, body })
    }
}
