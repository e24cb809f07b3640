use crate::config::RuntimeConfig;
use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::origin::OriginDecision;
use crate::safelist::filter_preflight_headers;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a RuntimeConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a RuntimeConfig) -> Self {
        Self { config }
    }

    /// Headers shared by every request kind. Empty when the origin is denied.
    pub(crate) fn build_common_headers(&self, decision: &OriginDecision<'_>) -> HeaderCollection {
        if decision.is_denied() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::new();
        headers.extend(self.build_origin_header(decision));
        headers.extend(self.build_credentials_header());
        headers.extend(self.build_allowed_headers());
        headers.extend(self.build_methods_header());
        headers.extend(self.build_exposed_headers());
        headers
    }

    /// Preflight-only additions on top of [`Self::build_common_headers`].
    pub(crate) fn build_preflight_headers(
        &self,
        decision: &OriginDecision<'_>,
        requested_headers: Option<&str>,
    ) -> HeaderCollection {
        if decision.is_denied() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(2);
        headers.extend(self.build_requested_headers(requested_headers));
        headers.extend(self.build_max_age_header());
        headers
    }

    pub(crate) fn build_origin_header(&self, decision: &OriginDecision<'_>) -> HeaderCollection {
        match decision.allow_origin_value() {
            Some(origin) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.config.allow_credentials() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.config.allow_headers() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.allow_methods(),
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.config.expose_headers() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
            return headers;
        }
        HeaderCollection::new()
    }

    /// Derives `Access-Control-Allow-Headers` from the request when no
    /// explicit list is configured.
    pub(crate) fn build_requested_headers(&self, requested: Option<&str>) -> HeaderCollection {
        if self.config.allow_headers().is_some() {
            return HeaderCollection::new();
        }

        match requested.filter(|value| !value.trim().is_empty()) {
            Some(requested) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    filter_preflight_headers(requested, self.config.preflight_headers()),
                );
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let max_age = self.config.max_age();
        if max_age == 0 {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
