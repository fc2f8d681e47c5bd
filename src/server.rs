//! axum adapter that mounts a [`ForwardingProxy`] on every path and method.
//!
//! The proxy call is awaited inside the request future, so a client that
//! disconnects drops the pending upstream call with it.

use crate::constants::header;
use crate::headers::Headers;
use crate::proxy::ForwardingProxy;
use crate::request::{InboundRequest, decode_query};
use crate::response::ProxyResponse;
use crate::upstream::Upstream;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

pub type SharedProxy<U> = Arc<ForwardingProxy<U>>;

pub fn router<U>(proxy: SharedProxy<U>) -> Router
where
    U: Upstream + 'static,
{
    Router::new().fallback(forward::<U>).with_state(proxy)
}

async fn forward<U>(
    State(proxy): State<SharedProxy<U>>,
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response
where
    U: Upstream + 'static,
{
    let inbound = InboundRequest {
        method: method.as_str().to_string(),
        query: query.as_deref().map(decode_query).unwrap_or_default(),
        body: decode_request_body(&body),
        origin: header_value(&headers, header::ORIGIN),
        access_control_request_headers: header_value(
            &headers,
            header::ACCESS_CONTROL_REQUEST_HEADERS,
        ),
    };

    into_response(proxy.handle(inbound).await)
}

fn decode_request_body(bytes: &Bytes) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

fn into_response(response: ProxyResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut http_response = match response.body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };

    apply_headers(http_response.headers_mut(), &response.headers);
    http_response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;
