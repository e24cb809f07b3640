use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use cors_policy_rs::{CorsDecision, Headers, RequestContext, constants::header};
use tracing::warn;

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let decision = state.cors.check(&owned_ctx.as_request_context());

    match decision {
        CorsDecision::Preflight(result) | CorsDecision::Options(result) => {
            let status = result
                .status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::NO_CONTENT);
            let mut response = Response::new(Body::empty());
            *response.status_mut() = status;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
        CorsDecision::Simple(result) => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &result.headers);
            response
        }
    }
}

pub(crate) fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(header_name), Ok(header_value)) => {
                map.insert(header_name, header_value);
            }
            (Err(err), _) => {
                warn!(header = %name, error = %err, "dropping CORS header with an invalid name");
            }
            (_, Err(err)) => {
                warn!(header = %name, value = ?value, error = %err, "dropping CORS header with an invalid value");
            }
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
