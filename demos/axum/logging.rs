use axum::{extract::Request, middleware::Next, response::Response};
use cors_policy_rs::constants::header;
use tracing::info;

/// Logs each request with its origin and headers, then the response headers.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    info!(%method, %path, %origin, headers = ?request.headers(), "request");
    let response = next.run(request).await;
    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        headers = ?response.headers(),
        "response"
    );

    response
}
