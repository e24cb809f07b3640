use crate::constants::LIST_SEPARATOR;
use crate::util::{normalize_lower, split_list};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Header names that may be echoed in `Access-Control-Allow-Headers` when no
/// explicit allow-list is configured.
pub const SAFE_HEADER_NAMES: [&str; 12] = [
    "accept",
    "accept-language",
    "content-language",
    "content-type",
    "dpr",
    "downlink",
    "save-data",
    "viewport-width",
    "width",
    "authorization",
    "x-requested-with",
    "x-csrf-token",
];

static SAFE_HEADERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SAFE_HEADER_NAMES.into_iter().collect());

/// Case-insensitive membership test against [`SAFE_HEADER_NAMES`].
pub fn is_safe_header(name: &str) -> bool {
    SAFE_HEADERS.contains(normalize_lower(name.trim()).as_str())
}

/// What a preflight advertises in `Access-Control-Allow-Headers` when the
/// configuration has no explicit header allow-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreflightHeaders {
    /// Keep only safelisted names. If none survive, the requested list is
    /// echoed unchanged so clients that already sent it keep working.
    #[default]
    Safelist,
    /// Echo `Access-Control-Request-Headers` unchanged.
    Mirror,
}

pub fn filter_preflight_headers(requested: &str, mode: PreflightHeaders) -> String {
    if mode == PreflightHeaders::Mirror {
        return requested.to_string();
    }

    let survivors = split_list(requested)
        .map(normalize_lower)
        .filter(|name| SAFE_HEADERS.contains(name.as_str()))
        .collect::<Vec<_>>();

    if survivors.is_empty() {
        requested.to_string()
    } else {
        survivors.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
#[path = "safelist_test.rs"]
mod safelist_test;
