mod common;

use bunner_cors_proxy::ProxyResponse;
use common::builders::{RecordingUpstream, get, preflight, proxy};
use insta::assert_json_snapshot;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct HeaderSnapshot {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ResponseSnapshot {
    status: u16,
    headers: Vec<HeaderSnapshot>,
    body: Option<Value>,
}

fn capture(response: ProxyResponse) -> ResponseSnapshot {
    ResponseSnapshot {
        status: response.status,
        headers: response
            .headers
            .into_iter()
            .map(|(name, value)| HeaderSnapshot { name, value })
            .collect(),
        body: response.body,
    }
}

#[tokio::test]
async fn cors_violation_snapshot() {
    let proxy = proxy()
        .allow_list(["http://localhost:3000"])
        .build(RecordingUpstream::ok(200, json!({})));

    let snapshot = capture(proxy.handle(get().with_origin("https://evil.example")).await);

    assert_json_snapshot!("cors_violation", snapshot);
}

#[tokio::test]
async fn preflight_allow_list_snapshot() {
    let proxy = proxy()
        .allow_list(["http://localhost:3000"])
        .build(RecordingUpstream::ok(200, json!({})));

    let snapshot = capture(
        proxy
            .handle(
                preflight()
                    .with_origin("http://localhost:3000")
                    .with_request_headers("content-type"),
            )
            .await,
    );

    assert_json_snapshot!("preflight_allow_list", snapshot);
}

#[tokio::test]
async fn upstream_bad_gateway_snapshot() {
    let proxy = proxy().build(RecordingUpstream::status_error(502, json!({"error": "bad"})));

    let snapshot = capture(proxy.handle(get()).await);

    assert_json_snapshot!("upstream_bad_gateway", snapshot);
}

#[tokio::test]
async fn proxy_failure_snapshot() {
    let proxy = proxy().build(RecordingUpstream::unreachable());

    let snapshot = capture(proxy.handle(get()).await);

    assert_json_snapshot!("proxy_failure", snapshot);
}
