use crate::options::{ProxyOptions, ValidationError};
use crate::origin::Origin;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const UPSTREAM_URL: &str = "PROXY_UPSTREAM_URL";
pub const ALLOWED_ORIGINS: &str = "PROXY_ALLOWED_ORIGINS";
pub const UPSTREAM_TIMEOUT_SECS: &str = "PROXY_UPSTREAM_TIMEOUT_SECS";
pub const BIND_ADDR: &str = "PROXY_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} must be a whole number of seconds, got '{value}'")]
    InvalidTimeout { name: &'static str, value: String },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ProxyOptions {
    /// Reads the options from the process environment.
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the options through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(UPSTREAM_URL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(EnvError::Missing(UPSTREAM_URL))?;
        let upstream_url = Url::parse(&raw_url).map_err(|source| EnvError::InvalidUrl {
            name: UPSTREAM_URL,
            source,
        })?;

        let origin = parse_origin(lookup(ALLOWED_ORIGINS).as_deref());
        let mut options = ProxyOptions::new(upstream_url, origin);

        if let Some(raw) = lookup(UPSTREAM_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| EnvError::InvalidTimeout {
                    name: UPSTREAM_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
            options = options.with_timeout(Duration::from_secs(secs));
        }

        options.validate()?;
        Ok(options)
    }
}

fn parse_origin(raw: Option<&str>) -> Origin {
    match raw.map(str::trim) {
        None | Some("") | Some("*") => Origin::any(),
        Some(list) => Origin::list(list.split(',')),
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;
