use crate::constants::method;
use crate::context::RequestContext;
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;
use url::form_urlencoded;

/// Query parameters in the order the caller sent them.
pub type QueryParams = IndexMap<String, String>;

/// A request as received from the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundRequest {
    pub method: String,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub origin: Option<String>,
    /// `Access-Control-Request-Headers`, only meaningful on a preflight.
    pub access_control_request_headers: Option<String>,
}

impl InboundRequest {
    pub fn new<S: Into<String>>(method: S) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_request_headers<S: Into<String>>(mut self, request_headers: S) -> Self {
        self.access_control_request_headers = Some(request_headers.into());
        self
    }

    pub fn with_query<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn as_context(&self) -> RequestContext<'_> {
        RequestContext::new(&self.method, self.origin.as_deref())
            .with_request_headers(self.access_control_request_headers.as_deref())
    }

    pub fn is_preflight(&self) -> bool {
        self.as_context().is_preflight()
    }
}

/// The request sent to the upstream on behalf of an [`InboundRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: Url,
    /// Lower-cased inbound method.
    pub method: String,
    pub body: Option<Value>,
}

impl OutboundRequest {
    pub fn from_inbound(upstream: &Url, inbound: InboundRequest) -> Self {
        let InboundRequest {
            method: inbound_method,
            query,
            body,
            ..
        } = inbound;

        let mut url = upstream.clone();
        if inbound_method == method::GET && !query.is_empty() {
            url.set_query(Some(&encode_query(&query)));
        }

        let body = if inbound_method == method::POST {
            body
        } else {
            None
        };

        Self {
            url,
            method: inbound_method.to_ascii_lowercase(),
            body,
        }
    }
}

pub fn encode_query(query: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Decodes a raw query string, keeping first-seen key order. A repeated key keeps its last value.
pub fn decode_query(raw: &str) -> QueryParams {
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
