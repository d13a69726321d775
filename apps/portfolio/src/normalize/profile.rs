use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::models::Profile;
use crate::normalize::projects::normalize_experience_item;
use crate::normalize::skills::normalize_skills;
use crate::normalize::str_field;

const KNOWN_FIELDS: &[&str] = &[
    "schemaVersion",
    "name",
    "headline",
    "location",
    "shortBio",
    "links",
    "skills",
    "experience",
];

/// Maps a raw profile payload to a `Profile`, deep-normalizing every
/// experience entry. Unknown top-level fields are carried in `extra`.
pub fn normalize_profile(raw: &Value) -> Profile {
    let experience = raw
        .get("experience")
        .and_then(Value::as_array)
        .map(|jobs| jobs.iter().map(normalize_experience_item).collect())
        .unwrap_or_default();

    let links: BTreeMap<String, String> = raw
        .get("links")
        .and_then(Value::as_object)
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|url| (k.clone(), url.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let schema_version = raw.get("schemaVersion").and_then(Value::as_u64);

    let mut extra: Map<String, Value> = raw
        .as_object()
        .map(|obj| {
            obj.iter()
                .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    // A schemaVersion that is not a plain integer stays verbatim in `extra`.
    if schema_version.is_none() {
        if let Some(v) = raw.get("schemaVersion") {
            extra.insert("schemaVersion".to_string(), v.clone());
        }
    }

    Profile {
        schema_version,
        name: str_field(raw, "name"),
        headline: str_field(raw, "headline"),
        location: str_field(raw, "location"),
        short_bio: str_field(raw, "shortBio"),
        links,
        skills: raw.get("skills").map(normalize_skills).unwrap_or_default(),
        experience,
        extra,
    }
}
