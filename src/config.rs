use crate::constants::method;
use crate::origin::{AllowedOrigins, OriginDecision, OriginMatching, parse_origin};
use crate::safelist::PreflightHeaders;
use crate::util::{join_values, split_list, split_list_dedup};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Errors raised while compiling a [`CorsConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "allow_credentials=true is incompatible with allow_origins=\"*\"; credentialed responses must echo a concrete origin"
    )]
    CredentialsWithWildcardOrigin,
}

/// Raw CORS configuration as supplied by the operator.
///
/// List-valued fields are comma-separated strings; surrounding whitespace and
/// empty entries are ignored. Every field is optional when deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins, or `*` for any. Empty allows every origin.
    pub allow_origins: String,
    pub allow_credentials: bool,
    /// Advertised in `Access-Control-Allow-Headers`. Empty lets preflights
    /// derive the value from the request, see [`PreflightHeaders`].
    pub allow_headers: String,
    pub expose_headers: String,
    /// Empty advertises `GET, POST, HEAD, OPTIONS`.
    pub allow_methods: String,
    /// Seconds a preflight may be cached; `0` omits `Access-Control-Max-Age`.
    pub max_age: u64,
    pub origin_matching: OriginMatching,
    pub preflight_headers: PreflightHeaders,
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origins(mut self, origins: impl Into<String>) -> Self {
        self.allow_origins = origins.into();
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn allow_headers(mut self, headers: impl Into<String>) -> Self {
        self.allow_headers = headers.into();
        self
    }

    pub fn expose_headers(mut self, headers: impl Into<String>) -> Self {
        self.expose_headers = headers.into();
        self
    }

    pub fn allow_methods(mut self, methods: impl Into<String>) -> Self {
        self.allow_methods = methods.into();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn origin_matching(mut self, matching: OriginMatching) -> Self {
        self.origin_matching = matching;
        self
    }

    pub fn preflight_headers(mut self, mode: PreflightHeaders) -> Self {
        self.preflight_headers = mode;
        self
    }

    /// Compiles the configuration into its immutable runtime form.
    ///
    /// All comma-separated values are parsed here so request handling only
    /// performs set lookups.
    pub fn validate(&self) -> Result<RuntimeConfig, ConfigError> {
        let allowed_origins = parse_allowed_origins(&self.allow_origins, self.origin_matching);

        if self.allow_credentials && matches!(allowed_origins, AllowedOrigins::Any) {
            error!(
                allow_origins = %self.allow_origins,
                "rejecting CORS configuration: credentials cannot be combined with a wildcard origin"
            );
            return Err(ConfigError::CredentialsWithWildcardOrigin);
        }

        if let AllowedOrigins::List(values) = &allowed_origins
            && values.is_empty()
        {
            warn!("no CORS origins configured; every origin will be allowed");
        }

        let mut allow_methods = split_list_dedup(&self.allow_methods);
        if allow_methods.is_empty() {
            allow_methods = method::DEFAULTS.iter().map(|m| m.to_string()).collect();
        }

        Ok(RuntimeConfig {
            allowed_origins,
            allow_credentials: self.allow_credentials,
            allow_headers: join_values(&split_list_dedup(&self.allow_headers)),
            expose_headers: join_values(&split_list_dedup(&self.expose_headers)),
            allow_methods: join_values(&allow_methods).unwrap_or_default(),
            max_age: self.max_age,
            origin_matching: self.origin_matching,
            preflight_headers: self.preflight_headers,
        })
    }
}

fn parse_allowed_origins(raw: &str, matching: OriginMatching) -> AllowedOrigins {
    let mut origins = IndexSet::new();
    for token in split_list(raw) {
        if token == "*" {
            return AllowedOrigins::Any;
        }

        if matching == OriginMatching::Normalized && parse_origin(token).is_none() {
            warn!(
                origin = token,
                "configured origin is not a scheme://host[:port] URL; comparing it as a lower-cased literal"
            );
        }
        origins.insert(matching.normalize(token));
    }
    AllowedOrigins::List(origins)
}

/// Compiled, immutable CORS policy shared by every request.
///
/// List values are stored already joined, ready to be emitted as header values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    allowed_origins: AllowedOrigins,
    allow_credentials: bool,
    allow_headers: Option<String>,
    expose_headers: Option<String>,
    allow_methods: String,
    max_age: u64,
    origin_matching: OriginMatching,
    preflight_headers: PreflightHeaders,
}

impl RuntimeConfig {
    pub fn match_origin<'a>(&self, origin: Option<&'a str>) -> OriginDecision<'a> {
        self.allowed_origins.resolve(origin, self.origin_matching)
    }

    pub fn allowed_origins(&self) -> &AllowedOrigins {
        &self.allowed_origins
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.allows_all()
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    /// Joined `Access-Control-Allow-Headers` value, `None` when unconfigured.
    pub fn allow_headers(&self) -> Option<&str> {
        self.allow_headers.as_deref()
    }

    pub fn expose_headers(&self) -> Option<&str> {
        self.expose_headers.as_deref()
    }

    /// Configured methods, or the defaults when none were configured.
    pub fn allow_methods(&self) -> &str {
        &self.allow_methods
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    pub fn origin_matching(&self) -> OriginMatching {
        self.origin_matching
    }

    pub fn preflight_headers(&self) -> PreflightHeaders {
        self.preflight_headers
    }
}

impl TryFrom<CorsConfig> for RuntimeConfig {
    type Error = ConfigError;

    fn try_from(config: CorsConfig) -> Result<Self, Self::Error> {
        config.validate()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
