use crate::constants::{APPLICATION_JSON, header};
use crate::options::ProxyOptions;
use crate::request::OutboundRequest;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// What the upstream answered with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UpstreamError {
    /// The upstream answered, but not with a 2xx status.
    #[error("upstream responded with status {status}")]
    Status { status: u16, body: Value },
    /// No response was received: connect, DNS, timeout or transport failure.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
}

/// Performs the single outbound call for a request.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, UpstreamError>;
}

/// [`Upstream`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_options(options: &ProxyOptions) -> Result<Self, reqwest::Error> {
        Self::new(options.timeout)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, UpstreamError> {
        // Methods are case-sensitive on the wire.
        let method = Method::from_bytes(request.method.to_ascii_uppercase().as_bytes())
            .map_err(|err| UpstreamError::Unreachable(err.to_string()))?;

        let mut builder = self
            .client
            .request(method, request.url)
            .header(header::CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| UpstreamError::Unreachable(err.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| UpstreamError::Unreachable(err.to_string()))?;
        let body = decode_body(&bytes);

        if status.is_success() {
            Ok(UpstreamResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Empty bodies become `null`; bodies that are not JSON are kept as a JSON string.
pub(crate) fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;
