use crate::origin::Origin;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Deployment-time configuration for a [`ForwardingProxy`](crate::ForwardingProxy).
#[derive(Clone, Debug)]
pub struct ProxyOptions {
    /// The single upstream every request is forwarded to.
    pub upstream_url: Url,
    pub origin: Origin,
    /// Overall deadline for one upstream call. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("upstream URL scheme '{0}' is not supported; use http or https")]
    UnsupportedUpstreamScheme(String),
    #[error("upstream URL must not carry a query string; GET parameters are appended per request")]
    UpstreamHasQuery,
    #[error("allowed origin list contains '*'; use Origin::Any for a wildcard policy")]
    WildcardInOriginList,
    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,
}

impl ProxyOptions {
    pub fn new(upstream_url: Url, origin: Origin) -> Self {
        Self {
            upstream_url,
            origin,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.upstream_url.scheme() {
            "http" | "https" => {}
            other => return Err(ValidationError::UnsupportedUpstreamScheme(other.to_string())),
        }

        if self.upstream_url.query().is_some() {
            return Err(ValidationError::UpstreamHasQuery);
        }

        if let Origin::List(values) = &self.origin
            && values.contains("*")
        {
            return Err(ValidationError::WildcardInOriginList);
        }

        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(ValidationError::ZeroTimeout);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
