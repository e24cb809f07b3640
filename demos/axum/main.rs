mod cors;
mod logging;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use clap::{Parser, ValueEnum};
use cors::middleware::cors_middleware;
use cors_policy_rs::{CorsConfig, OriginMatching, PreflightHeaders};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Demo server that applies the CORS policy to every route.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    #[arg(
        long,
        env = "CORS_ALLOW_ORIGINS",
        default_value = "https://app.example.com, https://console.example.com, http://localhost:3000"
    )]
    allow_origins: String,

    #[arg(long, env = "CORS_ALLOW_CREDENTIALS", default_value_t = true, action = clap::ArgAction::Set)]
    allow_credentials: bool,

    #[arg(
        long,
        env = "CORS_ALLOW_HEADERS",
        default_value = "Origin, Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, User-Agent"
    )]
    allow_headers: String,

    #[arg(long, env = "CORS_EXPOSE_HEADERS", default_value = "Origin, User-Agent")]
    expose_headers: String,

    #[arg(
        long,
        env = "CORS_ALLOW_METHODS",
        default_value = "GET, POST, PUT, DELETE, OPTIONS, PATCH, HEAD"
    )]
    allow_methods: String,

    #[arg(long, env = "CORS_MAX_AGE", default_value_t = 0)]
    max_age: u64,

    #[arg(
        long,
        env = "CORS_ORIGIN_MATCHING",
        value_enum,
        default_value_t = OriginMatchingArg::Normalized
    )]
    origin_matching: OriginMatchingArg,

    #[arg(
        long,
        env = "CORS_PREFLIGHT_HEADERS",
        value_enum,
        default_value_t = PreflightHeadersArg::Safelist
    )]
    preflight_headers: PreflightHeadersArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OriginMatchingArg {
    Normalized,
    Exact,
}

impl From<OriginMatchingArg> for OriginMatching {
    fn from(arg: OriginMatchingArg) -> Self {
        match arg {
            OriginMatchingArg::Normalized => OriginMatching::Normalized,
            OriginMatchingArg::Exact => OriginMatching::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PreflightHeadersArg {
    Safelist,
    Mirror,
}

impl From<PreflightHeadersArg> for PreflightHeaders {
    fn from(arg: PreflightHeadersArg) -> Self {
        match arg {
            PreflightHeadersArg::Safelist => PreflightHeaders::Safelist,
            PreflightHeadersArg::Mirror => PreflightHeaders::Mirror,
        }
    }
}

impl Args {
    fn cors_config(&self) -> CorsConfig {
        CorsConfig::new()
            .allow_origins(self.allow_origins.clone())
            .allow_credentials(self.allow_credentials)
            .allow_headers(self.allow_headers.clone())
            .expose_headers(self.expose_headers.clone())
            .allow_methods(self.allow_methods.clone())
            .max_age(self.max_age)
            .origin_matching(self.origin_matching.into())
            .preflight_headers(self.preflight_headers.into())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let app_state = match cors::build_state(args.cors_config()) {
        Ok(state) => state,
        Err(err) => {
            error!("invalid CORS configuration: {err}");
            std::process::exit(1);
        }
    };

    let app = Router::new()
        .route("/", get(routes::index))
        .layer(axum::middleware::from_fn(logging::log_requests))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {}: {err}", args.bind);
            std::process::exit(1);
        }
    };
    info!("CORS demo running on http://{}", args.bind);

    if let Err(err) = axum::serve(listener, app).await {
        error!("server error: {err}");
    }
}
