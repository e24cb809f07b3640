#![allow(dead_code)]

use cors_policy_rs::constants::method;
use cors_policy_rs::{
    Cors, CorsConfig, CorsDecision, OriginMatching, PreflightHeaders, RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    config: CorsConfig,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: &str) -> Self {
        self.config.allow_origins = origins.into();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.config.allow_credentials = enabled;
        self
    }

    pub fn allow_headers(mut self, headers: &str) -> Self {
        self.config.allow_headers = headers.into();
        self
    }

    pub fn expose_headers(mut self, headers: &str) -> Self {
        self.config.expose_headers = headers.into();
        self
    }

    pub fn methods(mut self, methods: &str) -> Self {
        self.config.allow_methods = methods.into();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.config.max_age = seconds;
        self
    }

    pub fn origin_matching(mut self, matching: OriginMatching) -> Self {
        self.config.origin_matching = matching;
        self
    }

    pub fn preflight_headers(mut self, mode: PreflightHeaders) -> Self {
        self.config.preflight_headers = mode;
        self
    }

    pub fn config(self) -> CorsConfig {
        self.config
    }

    pub fn build(self) -> Cors {
        Cors::new(self.config).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
