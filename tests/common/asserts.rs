use bunner_cors_proxy::ProxyResponse;
use bunner_cors_proxy::constants::header;
use serde_json::{Value, json};

pub fn header_value<'a>(response: &'a ProxyResponse, name: &str) -> Option<&'a str> {
    response
        .headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn assert_json(response: &ProxyResponse, status: u16, body: Value) {
    assert_eq!(response.status, status, "unexpected status");
    assert_eq!(response.body.as_ref(), Some(&body), "unexpected body");
}

pub fn assert_cors_violation(response: &ProxyResponse) {
    assert_json(
        response,
        403,
        json!({"success": false, "message": "CORS policy violation."}),
    );
    assert!(
        header_value(response, header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none(),
        "rejected responses must not grant an origin",
    );
}

pub fn assert_proxy_failure(response: &ProxyResponse) {
    assert_json(
        response,
        500,
        json!({"success": false, "message": "Internal Server Error (Proxy failure)."}),
    );
}
