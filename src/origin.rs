use crate::util::normalize_lower;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use url::Url;

/// How request origins are compared against the configured allow-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginMatching {
    /// Parse both sides as `scheme://host[:port]` and compare the serialized
    /// origins, so `HTTPS://Example.COM` matches `https://example.com`.
    /// Values that do not parse to a tuple origin fall back to their
    /// lower-cased literal.
    #[default]
    Normalized,
    /// Byte-for-byte comparison of the literal values.
    Exact,
}

impl OriginMatching {
    pub fn normalize(self, origin: &str) -> String {
        match self {
            OriginMatching::Normalized => normalize_origin(origin),
            OriginMatching::Exact => origin.to_string(),
        }
    }
}

/// Serializes `origin` as `scheme://host[:port]` with scheme and host
/// lower-cased, or returns its lower-cased literal when it is not a bare
/// `scheme://host[:port]` URL (`null`, `file://`, paths, userinfo, garbage).
pub fn normalize_origin(origin: &str) -> String {
    parse_origin(origin).unwrap_or_else(|| normalize_lower(origin))
}

pub(crate) fn parse_origin(origin: &str) -> Option<String> {
    let parsed = Url::parse(origin).ok()?;
    if !is_bare_origin(&parsed) {
        return None;
    }

    let origin = parsed.origin();
    if origin.is_tuple() {
        Some(origin.ascii_serialization())
    } else {
        None
    }
}

// Anything past `scheme://host[:port]` must survive into the comparison, so
// only values without userinfo, path, query or fragment are reserialized.
fn is_bare_origin(url: &Url) -> bool {
    url.username().is_empty()
        && url.password().is_none()
        && matches!(url.path(), "" | "/")
        && url.query().is_none()
        && url.fragment().is_none()
}

/// Origins permitted by the compiled configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// The configured list contained `*`.
    Any,
    /// Normalized allow-list. An empty list allows every origin.
    List(IndexSet<String>),
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::List(IndexSet::new())
    }
}

impl AllowedOrigins {
    /// True when every non-empty origin is accepted, either through `*` or
    /// through an empty allow-list.
    pub fn allows_all(&self) -> bool {
        match self {
            Self::Any => true,
            Self::List(values) => values.is_empty(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        let values = match self {
            Self::Any => None,
            Self::List(values) => Some(values.iter().map(String::as_str)),
        };
        values.into_iter().flatten()
    }

    pub fn resolve<'a>(
        &self,
        request_origin: Option<&'a str>,
        matching: OriginMatching,
    ) -> OriginDecision<'a> {
        let Some(origin) = request_origin.filter(|value| !value.trim().is_empty()) else {
            return OriginDecision::Absent;
        };

        let allowed = match self {
            Self::Any => true,
            Self::List(values) if values.is_empty() => true,
            Self::List(values) => values.contains(matching.normalize(origin).as_str()),
        };

        if allowed {
            OriginDecision::Allowed(origin)
        } else {
            OriginDecision::Denied
        }
    }
}

/// Outcome of matching a request's `Origin` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision<'a> {
    /// No `Origin` header: same-origin or non-browser traffic. CORS headers
    /// that do not depend on the origin are still emitted.
    Absent,
    /// Carries the literal origin received, to be echoed back verbatim.
    Allowed(&'a str),
    /// No CORS headers are emitted.
    Denied,
}

impl<'a> OriginDecision<'a> {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    pub fn allow_origin_value(&self) -> Option<&'a str> {
        match *self {
            Self::Allowed(origin) => Some(origin),
            Self::Absent | Self::Denied => None,
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
