use serde_json::Value;

use crate::models::{SkillLevel, Skills};
use crate::normalize::string_list_field;

/// Maps the raw `skills` block. Entries without a usable name are dropped;
/// a missing or non-numeric `level` becomes 0. Anything but an object is an
/// empty `Skills`.
pub fn normalize_skills(raw: &Value) -> Skills {
    Skills {
        soft: skill_levels(raw.get("soft")),
        technical: skill_levels(raw.get("technical")),
        interests: string_list_field(raw, "interests"),
    }
}

fn skill_levels(raw: Option<&Value>) -> Vec<SkillLevel> {
    raw.and_then(Value::as_array)
        .map(|items| items.iter().filter_map(skill_level).collect())
        .unwrap_or_default()
}

fn skill_level(raw: &Value) -> Option<SkillLevel> {
    let name = raw.get("name").and_then(Value::as_str)?.trim();
    if name.is_empty() {
        return None;
    }
    let level = raw
        .get("level")
        .and_then(Value::as_f64)
        .filter(|l| l.is_finite())
        .unwrap_or(0.0);
    Some(SkillLevel {
        name: name.to_string(),
        level,
    })
}
