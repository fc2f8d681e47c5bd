use axum::{
    Json, Router,
    body::Bytes,
    extract::RawQuery,
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::any,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Echoes what it received so tests can see the outbound request.
async fn echo(
    method: Method,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Json<Value> {
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    Json(json!({
        "method": method.as_str(),
        "query": query,
        "content_type": headers
            .get("content-type")
            .and_then(|value| value.to_str().ok()),
        "body": body,
    }))
}

async fn bad_gateway() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, Json(json!({"error": "bad"})))
}

async fn plain_text() -> &'static str {
    "hello from upstream"
}

pub async fn spawn() -> SocketAddr {
    let app = Router::new()
        .route("/exec", any(echo))
        .route("/fail", any(bad_gateway))
        .route("/text", any(plain_text));
    serve(app).await
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}
