use crate::config::{ConfigError, CorsConfig, RuntimeConfig};
use crate::context::{RequestContext, RequestKind};
use crate::header_builder::HeaderBuilder;
use crate::origin::OriginDecision;
use crate::result::{CorsDecision, CorsResult};
use tracing::{debug, info, trace};

/// Core CORS policy engine that evaluates requests against a compiled
/// [`RuntimeConfig`].
///
/// `Cors` is immutable once built; share it between workers with `Arc`.
#[derive(Debug, Clone)]
pub struct Cors {
    config: RuntimeConfig,
}

impl Cors {
    /// Validates `config` and builds the engine. A [`ConfigError`] here is
    /// fatal: the host should refuse to start serving.
    pub fn new(config: CorsConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        info!(
            any_origin = config.allows_any_origin(),
            origins = config.allowed_origins().values().count(),
            credentials = config.allow_credentials(),
            methods = config.allow_methods(),
            max_age = config.max_age(),
            origin_matching = ?config.origin_matching(),
            preflight_headers = ?config.preflight_headers(),
            "CORS policy compiled"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let kind = RequestKind::classify(request);
        let decision = self.config.match_origin(request.origin());
        trace!(
            ?kind,
            method = request.method,
            origin = ?request.origin(),
            "evaluating CORS request"
        );

        if decision.is_denied() {
            debug!(
                ?kind,
                origin = ?request.origin(),
                "origin not allowed; omitting CORS headers"
            );
        }

        match kind {
            RequestKind::Preflight => {
                CorsDecision::Preflight(self.process_preflight(request, &decision))
            }
            RequestKind::Options => CorsDecision::Options(self.process_options(&decision)),
            RequestKind::Simple => CorsDecision::Simple(self.process_simple(&decision)),
        }
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        decision: &OriginDecision<'_>,
    ) -> CorsResult {
        let builder = HeaderBuilder::new(&self.config);
        let mut headers = builder.build_common_headers(decision);
        headers.extend(builder.build_preflight_headers(decision, request.requested_headers()));
        CorsResult::terminate(headers.into_headers())
    }

    fn process_options(&self, decision: &OriginDecision<'_>) -> CorsResult {
        let builder = HeaderBuilder::new(&self.config);
        CorsResult::terminate(builder.build_common_headers(decision).into_headers())
    }

    fn process_simple(&self, decision: &OriginDecision<'_>) -> CorsResult {
        let builder = HeaderBuilder::new(&self.config);
        CorsResult::forward(builder.build_common_headers(decision).into_headers())
    }
}

impl TryFrom<CorsConfig> for Cors {
    type Error = ConfigError;

    fn try_from(config: CorsConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
