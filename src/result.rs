use crate::constants::OPTIONS_SUCCESS_STATUS;
use crate::context::RequestKind;
use crate::headers::Headers;

/// Headers and response metadata emitted for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsResult {
    pub headers: Headers,
    /// Status to respond with when the response ends here.
    pub status: Option<u16>,
    /// `true` when the request must not reach the next handler.
    pub end_response: bool,
}

impl CorsResult {
    pub(crate) fn terminate(headers: Headers) -> Self {
        Self {
            headers,
            status: Some(OPTIONS_SUCCESS_STATUS),
            end_response: true,
        }
    }

    pub(crate) fn forward(headers: Headers) -> Self {
        Self {
            headers,
            status: None,
            end_response: false,
        }
    }
}

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// CORS preflight; answer with the headers and a 204.
    Preflight(CorsResult),
    /// `OPTIONS` without `Access-Control-Request-Method`; answer with a 204.
    Options(CorsResult),
    /// Forward to the next handler and decorate its response.
    Simple(CorsResult),
}

impl CorsDecision {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Preflight(_) => RequestKind::Preflight,
            Self::Options(_) => RequestKind::Options,
            Self::Simple(_) => RequestKind::Simple,
        }
    }

    pub fn result(&self) -> &CorsResult {
        match self {
            Self::Preflight(result) | Self::Options(result) | Self::Simple(result) => result,
        }
    }

    pub fn into_result(self) -> CorsResult {
        match self {
            Self::Preflight(result) | Self::Options(result) | Self::Simple(result) => result,
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.result().headers
    }

    pub fn status(&self) -> Option<u16> {
        self.result().status
    }

    pub fn ends_response(&self) -> bool {
        self.result().end_response
    }
}
