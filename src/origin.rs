use indexmap::IndexSet;

/// Which browser origins may receive a proxied response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Wildcard policy; every request passes and `*` is emitted.
    #[default]
    Any,
    /// Explicit allow-list. Requests without an `Origin` header are treated as
    /// same-origin or server-to-server traffic and pass.
    List(IndexSet<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit `Access-Control-Allow-Origin: *`.
    Any,
    /// Echo the request origin back.
    Mirror,
    /// Allowed, but there is no origin to echo.
    Skip,
    Disallow,
}

impl OriginDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, OriginDecision::Disallow)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list, trimming entries and dropping blanks and duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(
            values
                .into_iter()
                .map(|value| value.into().trim().to_string())
                .filter(|value| !value.is_empty())
                .collect(),
        )
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(allowed) => match request_origin {
                None => OriginDecision::Skip,
                Some(origin) if allowed.contains(origin) => OriginDecision::Mirror,
                Some(_) => OriginDecision::Disallow,
            },
        }
    }

    pub fn vary_on_origin(&self) -> bool {
        !matches!(self, Origin::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
