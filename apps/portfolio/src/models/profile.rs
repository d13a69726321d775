use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named technology tag with its accumulated usage weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechWeight {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceProject {
    pub id: String,
    pub name: String,
    pub client: Option<String>,
    pub tech: Vec<TechWeight>,
    pub highlights: Vec<String>,
}

/// One job on the experience timeline.
///
/// `projects` is never empty once built by `normalize::projects`: legacy
/// entries get a single synthesized "Main work" project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    /// `YYYY-MM`
    pub date_start: String,
    /// `YYYY-MM`, `None` for a current position.
    pub date_end: Option<String>,
    pub projects: Vec<ExperienceProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u64>,
    pub name: String,
    pub headline: String,
    pub location: String,
    pub short_bio: String,
    /// e.g. `linkedin`, `github`, `portfolio` to their URLs.
    pub links: BTreeMap<String, String>,
    pub skills: Skills,
    pub experience: Vec<ExperienceItem>,
    /// Top-level fields this model does not know about, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Highest value of `SkillLevel::level`.
pub const MAX_SKILL_LEVEL: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub name: String,
    /// 1 to 5 when well-formed; 0 when the payload had no usable number.
    pub level: f64,
}

impl SkillLevel {
    /// Level as a bar width, clamped to 0 to 100.
    pub fn level_percent(&self) -> f64 {
        (self.level / MAX_SKILL_LEVEL * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub soft: Vec<SkillLevel>,
    pub technical: Vec<SkillLevel>,
    pub interests: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.soft.is_empty() && self.technical.is_empty() && self.interests.is_empty()
    }
}
