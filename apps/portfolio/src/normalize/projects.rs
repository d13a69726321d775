use serde_json::Value;

use crate::models::{ExperienceItem, ExperienceProject};
use crate::normalize::{id_field, opt_str_field, str_field, string_list_field};
use crate::normalize::tech::normalize_tech;

/// Name given to the single project synthesized from a legacy entry.
pub const LEGACY_PROJECT_NAME: &str = "Main work";

/// Builds the project list for one raw experience record.
///
/// A non-empty `projects` array wins; each project's `tech` is normalized on
/// its own, so old and new tag shapes can sit side by side within one job.
/// Otherwise the legacy `pills` / `details` pair is folded into one project
/// with id `<job id>-main`. The result is never empty.
pub fn normalize_projects(job: &Value) -> Vec<ExperienceProject> {
    if let Some(projects) = job.get("projects").and_then(Value::as_array) {
        if !projects.is_empty() {
            return projects.iter().map(normalize_project).collect();
        }
    }

    vec![ExperienceProject {
        id: format!("{}-main", id_field(job, "id")),
        name: LEGACY_PROJECT_NAME.to_string(),
        client: None,
        tech: job.get("pills").map(normalize_tech).unwrap_or_default(),
        highlights: string_list_field(job, "details"),
    }]
}

fn normalize_project(raw: &Value) -> ExperienceProject {
    ExperienceProject {
        id: id_field(raw, "id"),
        name: str_field(raw, "name"),
        client: opt_str_field(raw, "client"),
        tech: raw.get("tech").map(normalize_tech).unwrap_or_default(),
        highlights: string_list_field(raw, "highlights"),
    }
}

/// Maps one raw experience record to an `ExperienceItem`.
pub fn normalize_experience_item(job: &Value) -> ExperienceItem {
    ExperienceItem {
        id: id_field(job, "id"),
        company: str_field(job, "company"),
        title: str_field(job, "title"),
        location: str_field(job, "location"),
        date_start: str_field(job, "dateStart"),
        date_end: opt_str_field(job, "dateEnd"),
        projects: normalize_projects(job),
    }
}
