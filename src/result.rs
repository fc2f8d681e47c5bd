use crate::headers::Headers;

/// Outcome of evaluating a request against the configured [`Origin`](crate::Origin) policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// The request may proceed; `headers` go on whatever response is produced.
    Allowed { headers: Headers },
    /// The origin is not permitted; the upstream must not be contacted.
    Rejected { headers: Headers },
}

impl CorsDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CorsDecision::Allowed { .. })
    }

    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Allowed { headers } | CorsDecision::Rejected { headers } => headers,
        }
    }
}
