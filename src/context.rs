use crate::constants::method;

/// Borrowed view over the parts of an inbound request the policy reads.
///
/// Adapters build one per request from the framework's header map and drop it
/// once [`Cors::check`](crate::Cors::check) returns.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// The `Origin` header, or `None` when it is missing or blank.
    pub fn origin(&self) -> Option<&'a str> {
        non_blank(self.origin)
    }

    /// The `Access-Control-Request-Headers` header, or `None` when it is
    /// missing or blank.
    pub fn requested_headers(&self) -> Option<&'a str> {
        non_blank(self.access_control_request_headers)
    }

    pub fn is_options(&self) -> bool {
        self.method.trim().eq_ignore_ascii_case(method::OPTIONS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// How a request is handled by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `OPTIONS` carrying `Access-Control-Request-Method`; answered with 204.
    Preflight,
    /// Any other `OPTIONS` request; answered with 204.
    Options,
    /// Everything else; decorated and forwarded to the next handler.
    Simple,
}

impl RequestKind {
    pub fn classify(request: &RequestContext<'_>) -> Self {
        if !request.is_options() {
            return Self::Simple;
        }

        if non_blank(request.access_control_request_method).is_some() {
            Self::Preflight
        } else {
            Self::Options
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
