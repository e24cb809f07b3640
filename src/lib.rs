pub mod constants;

mod config;
mod context;
mod cors;
mod header_builder;
mod headers;
mod origin;
mod result;
mod safelist;
mod util;

pub use config::{ConfigError, CorsConfig, RuntimeConfig};
pub use context::{RequestContext, RequestKind};
pub use cors::Cors;
pub use headers::Headers;
pub use origin::{AllowedOrigins, OriginDecision, OriginMatching, normalize_origin};
pub use result::{CorsDecision, CorsResult};
pub use safelist::{PreflightHeaders, SAFE_HEADER_NAMES, filter_preflight_headers, is_safe_header};
