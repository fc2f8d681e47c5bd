/// The parts of an inbound request the CORS policy looks at.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin,
            access_control_request_headers: None,
        }
    }

    pub fn with_request_headers(mut self, request_headers: Option<&'a str>) -> Self {
        self.access_control_request_headers = request_headers;
        self
    }

    /// An empty `Origin` header counts as no origin at all.
    pub(crate) fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }

    pub(crate) fn request_headers(&self) -> Option<&'a str> {
        self.access_control_request_headers
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(crate::constants::method::OPTIONS)
    }
}
