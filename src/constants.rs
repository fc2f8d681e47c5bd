pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const POST: &str = "POST";

    /// Value advertised in `Access-Control-Allow-Methods`.
    pub const ALLOWED: &str = "GET, POST, OPTIONS";
}

pub mod message {
    pub const CORS_POLICY_VIOLATION: &str = "CORS policy violation.";
    pub const PROXY_FAILURE: &str = "Internal Server Error (Proxy failure).";
}

pub const APPLICATION_JSON: &str = "application/json";
