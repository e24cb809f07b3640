use crate::constants::LIST_SEPARATOR;
use std::collections::HashSet;

pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        lowercase_unicode_if_needed(value).unwrap_or_else(|| value.to_owned())
    }
}

pub(crate) fn lowercase_unicode_if_needed(value: &str) -> Option<String> {
    for (idx, ch) in value.char_indices() {
        if ch.is_uppercase() {
            let mut lowered = String::with_capacity(value.len());
            lowered.push_str(&value[..idx]);
            lowered.extend(ch.to_lowercase());

            let tail_start = idx + ch.len_utf8();
            for tail_ch in value[tail_start..].chars() {
                if tail_ch.is_uppercase() {
                    lowered.extend(tail_ch.to_lowercase());
                } else {
                    lowered.push(tail_ch);
                }
            }

            return Some(lowered);
        }
    }

    None
}

/// Splits a comma-separated configuration value, trimming each token and
/// dropping the empty ones.
pub(crate) fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Like [`split_list`], but keeps only the first spelling of tokens that
/// differ by case alone.
pub(crate) fn split_list_dedup(value: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();
    for token in split_list(value) {
        if seen.insert(normalize_lower(token)) {
            deduped.push(token.to_string());
        }
    }
    deduped
}

pub(crate) fn join_values(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(LIST_SEPARATOR))
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
