use crate::options::{ProxyOptions, ValidationError};
use crate::policy::CorsPolicy;
use crate::request::{InboundRequest, OutboundRequest};
use crate::response::ProxyResponse;
use crate::result::CorsDecision;
use crate::upstream::{Upstream, UpstreamError};
use url::Url;

/// Forwards each inbound request to one fixed upstream after a CORS check.
///
/// A request moves through `received → cors-checked → (denied | preflight-ok | forwarded)
/// → responded`. Exactly one upstream call happens per forwarded request and none otherwise.
pub struct ForwardingProxy<U> {
    policy: CorsPolicy,
    upstream_url: Url,
    upstream: U,
}

impl<U: Upstream> ForwardingProxy<U> {
    pub fn new(options: ProxyOptions, upstream: U) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self {
            policy: CorsPolicy::new(options.origin),
            upstream_url: options.upstream_url,
            upstream,
        })
    }

    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub async fn handle(&self, request: InboundRequest) -> ProxyResponse {
        let cors_headers = match self.policy.check(&request.as_context()) {
            CorsDecision::Allowed { headers } => headers,
            CorsDecision::Rejected { headers } => {
                tracing::debug!(
                    origin = request.origin.as_deref().unwrap_or_default(),
                    method = %request.method,
                    "request rejected by CORS policy"
                );
                return ProxyResponse::cors_violation().with_headers(headers);
            }
        };

        if request.is_preflight() {
            tracing::debug!(origin = ?request.origin, "answered preflight");
            return ProxyResponse::preflight().with_headers(cors_headers);
        }

        let outbound = OutboundRequest::from_inbound(&self.upstream_url, request);
        tracing::debug!(
            method = %outbound.method,
            url = %outbound.url,
            has_body = outbound.body.is_some(),
            "forwarding to upstream"
        );

        let response = match self.upstream.send(outbound).await {
            Ok(upstream) => ProxyResponse::json(upstream.status, upstream.body),
            Err(err) => {
                tracing::error!(error = %err, "proxy error");
                match err {
                    UpstreamError::Status { status, body } => {
                        ProxyResponse::upstream_error(status, body)
                    }
                    UpstreamError::Unreachable(_) => ProxyResponse::proxy_failure(),
                }
            }
        };

        response.with_headers(cors_headers)
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;
