use crate::constants::message;
use crate::headers::{HeaderCollection, Headers};
use serde_json::{Map, Value, json};

/// The reply handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Headers,
    /// `None` means an empty body.
    pub body: Option<Value>,
}

impl ProxyResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Some(body),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: None,
        }
    }

    /// `403 {"success": false, "message": "CORS policy violation."}`
    pub fn cors_violation() -> Self {
        Self::json(403, failure_message(message::CORS_POLICY_VIOLATION))
    }

    /// `200` with no body.
    pub fn preflight() -> Self {
        Self::empty(200)
    }

    /// `500 {"success": false, "message": "Internal Server Error (Proxy failure)."}`
    pub fn proxy_failure() -> Self {
        Self::json(500, failure_message(message::PROXY_FAILURE))
    }

    /// Relays an upstream error status with its body shallow-merged under `success: false`.
    ///
    /// Keys from the upstream body win, `success` included. Bodies that are not
    /// objects contribute nothing.
    pub fn upstream_error(status: u16, body: Value) -> Self {
        let mut merged = Map::new();
        merged.insert("success".to_string(), Value::Bool(false));
        if let Value::Object(fields) = body {
            merged.extend(fields);
        }
        Self::json(status, Value::Object(merged))
    }

    /// Puts `headers` in front of any headers already on the response.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        let mut collection = HeaderCollection::with_estimate(headers.len() + self.headers.len());
        for (name, value) in headers.into_iter().chain(self.headers) {
            collection.push(name, value);
        }
        self.headers = collection.into_headers();
        self
    }
}

fn failure_message(text: &str) -> Value {
    json!({
        "success": false,
        "message": text,
    })
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
