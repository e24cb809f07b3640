#![allow(dead_code)]

use super::headers::header_value;
use cors_policy_rs::constants::header;
use cors_policy_rs::{CorsDecision, Headers};

pub const CORS_RESPONSE_HEADERS: [&str; 6] = [
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_EXPOSE_HEADERS,
    header::ACCESS_CONTROL_MAX_AGE,
];

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => {
            assert_eq!(result.status, None, "simple requests keep the handler status");
            assert!(!result.end_response, "simple requests must be forwarded");
            result.headers
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Preflight(result) => (
            result.headers,
            result.status.expect("preflight carries a status"),
            result.end_response,
        ),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_options(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Options(result) => (
            result.headers,
            result.status.expect("options carries a status"),
            result.end_response,
        ),
        other => panic!("expected plain options decision, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_no_cors_headers(headers: &Headers) {
    for name in CORS_RESPONSE_HEADERS {
        assert!(
            header_value(headers, name).is_none(),
            "{name} should be absent, headers: {headers:?}"
        );
    }
}
