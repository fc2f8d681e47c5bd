use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in emission order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(4)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: String, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name, value);
        }
    }

    /// Merges `value` into `Vary`. Both sides may be comma lists; tokens are
    /// deduplicated case-insensitively and keep their first spelling.
    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let existing = self.headers.get(header::VARY).cloned().unwrap_or_default();

        let mut merged: Vec<&str> = Vec::new();
        for token in existing
            .split(',')
            .chain(incoming.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
        {
            if !merged.iter().any(|seen| seen.eq_ignore_ascii_case(token)) {
                merged.push(token);
            }
        }

        if merged.is_empty() {
            self.headers.shift_remove(header::VARY);
        } else {
            let value = merged.join(", ");
            self.headers.insert(header::VARY.to_string(), value);
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
