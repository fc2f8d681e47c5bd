use async_trait::async_trait;
use bunner_cors_proxy::{
    ForwardingProxy, InboundRequest, Origin, OutboundRequest, ProxyOptions, Upstream,
    UpstreamError, UpstreamResponse,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

pub const UPSTREAM: &str = "https://script.example.com/macros/s/deployment/exec";

/// Mock upstream that records every call and answers with a fixed reply.
#[derive(Clone)]
pub struct RecordingUpstream {
    reply: Result<UpstreamResponse, UpstreamError>,
    calls: Arc<Mutex<Vec<OutboundRequest>>>,
}

impl RecordingUpstream {
    pub fn ok(status: u16, body: Value) -> Self {
        Self {
            reply: Ok(UpstreamResponse { status, body }),
            calls: Arc::default(),
        }
    }

    pub fn status_error(status: u16, body: Value) -> Self {
        Self {
            reply: Err(UpstreamError::Status { status, body }),
            calls: Arc::default(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(UpstreamError::Unreachable(
                "error sending request: connection refused".into(),
            )),
            calls: Arc::default(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    pub fn calls(&self) -> Vec<OutboundRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl Upstream for RecordingUpstream {
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.lock().expect("calls lock").push(request);
        self.reply.clone()
    }
}

pub struct ProxyBuilder {
    origin: Origin,
    upstream_url: String,
}

impl ProxyBuilder {
    pub fn new() -> Self {
        Self {
            origin: Origin::any(),
            upstream_url: UPSTREAM.to_string(),
        }
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn allow_list<I, S>(self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin(Origin::list(origins))
    }

    pub fn upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    pub fn options(&self) -> ProxyOptions {
        ProxyOptions::new(
            Url::parse(&self.upstream_url).expect("valid upstream url"),
            self.origin.clone(),
        )
    }

    pub fn build<U: Upstream>(self, upstream: U) -> ForwardingProxy<U> {
        ForwardingProxy::new(self.options(), upstream).expect("valid proxy options")
    }
}

pub fn proxy() -> ProxyBuilder {
    ProxyBuilder::new()
}

pub fn get() -> InboundRequest {
    InboundRequest::new("GET")
}

pub fn post(body: Value) -> InboundRequest {
    InboundRequest::new("POST").with_body(body)
}

pub fn preflight() -> InboundRequest {
    InboundRequest::new("OPTIONS")
}
