mod common;

use cors_policy_rs::constants::{header, method};
use common::asserts::{assert_no_cors_headers, assert_preflight, assert_simple};
use common::builders::{cors, preflight_request, simple_request};
use common::headers::header_value;
use std::sync::Arc;
use std::thread;

#[test]
fn cors_can_be_shared_across_threads() {
    let origins = (0..8)
        .map(|i| format!("https://thread{}.example", i))
        .collect::<Vec<_>>()
        .join(", ");
    let cors = Arc::new(
        cors()
            .origins(&origins)
            .credentials(true)
            .allow_headers("X-Thread")
            .max_age(120)
            .build(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let cors = Arc::clone(&cors);
        handles.push(thread::spawn(move || {
            let origin = format!("https://thread{}.example", i);
            let (headers, status, _) = assert_preflight(
                preflight_request()
                    .origin(origin.as_str())
                    .request_method(method::POST)
                    .request_headers("X-Thread")
                    .check(&cors),
            );

            assert_eq!(status, 204);
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS),
                Some("X-Thread"),
            );

            let simple_headers =
                assert_simple(simple_request().origin(origin.as_str()).check(&cors));
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );

            let denied = assert_simple(
                simple_request()
                    .origin(format!("https://intruder{}.example", i))
                    .check(&cors),
            );
            assert_no_cors_headers(&denied);
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}

#[test]
fn cors_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<cors_policy_rs::Cors>();
}
