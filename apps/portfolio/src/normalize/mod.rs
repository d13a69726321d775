//! Boundary normalizers: total mappings from untyped API JSON to the types in
//! `crate::models`. None of these functions can fail; malformed fields degrade
//! to their defaults instead of rejecting the whole payload.

pub mod articles;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod tech;

pub use articles::{normalize_article, normalize_article_list};
pub use profile::normalize_profile;
pub use projects::{normalize_experience_item, normalize_projects};
pub use skills::normalize_skills;
pub use tech::normalize_tech;

use serde_json::Value;

/// String field or `""`.
pub(crate) fn str_field(raw: &Value, key: &str) -> String {
    opt_str_field(raw, key).unwrap_or_default()
}

pub(crate) fn opt_str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Identifiers have shown up both as strings and as bare numbers.
pub(crate) fn id_field(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Only the string elements of an array field; anything else yields `[]`.
pub(crate) fn string_list_field(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
