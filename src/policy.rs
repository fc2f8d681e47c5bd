use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::origin::{Origin, OriginDecision};
use crate::result::CorsDecision;

/// Evaluates requests against an [`Origin`] policy.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    origin: Origin,
}

impl CorsPolicy {
    pub fn new(origin: Origin) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let request_origin = request.origin();
        let decision = self.origin.resolve(request_origin);
        let mut headers = self.build_origin_headers(&decision, request_origin);

        if !decision.is_allowed() {
            return CorsDecision::Rejected {
                headers: headers.into_headers(),
            };
        }

        headers.extend(self.build_methods_header());
        if request.is_preflight() {
            headers.extend(self.build_allowed_headers(request));
        }
        CorsDecision::Allowed {
            headers: headers.into_headers(),
        }
    }

    fn build_origin_headers(
        &self,
        decision: &OriginDecision,
        request_origin: Option<&str>,
    ) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        if self.origin.vary_on_origin() {
            headers.add_vary(header::ORIGIN);
        }

        match decision {
            OriginDecision::Any => {
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                    "*".to_string(),
                );
            }
            OriginDecision::Mirror => {
                if let Some(origin) = request_origin {
                    headers.push(
                        header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                        origin.to_string(),
                    );
                }
            }
            OriginDecision::Skip | OriginDecision::Disallow => {}
        }

        headers
    }

    fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS.to_string(),
            method::ALLOWED.to_string(),
        );
        headers
    }

    /// Mirrors `Access-Control-Request-Headers` so any header the browser asks for is allowed.
    fn build_allowed_headers(&self, request: &RequestContext<'_>) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if let Some(request_headers) = request.request_headers() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                request_headers.to_string(),
            );
        }
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
