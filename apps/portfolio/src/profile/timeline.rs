use crate::models::ExperienceItem;

/// Jobs ordered by start date, most recent first. `YYYY-MM` compares
/// correctly as plain text; equal starts keep their payload order.
pub fn sorted_experience(experience: &[ExperienceItem]) -> Vec<&ExperienceItem> {
    let mut jobs: Vec<&ExperienceItem> = experience.iter().collect();
    jobs.sort_by(|a, b| b.date_start.cmp(&a.date_start));
    jobs
}

/// `2021-03 – present` style range label.
pub fn date_range_label(job: &ExperienceItem) -> String {
    format!(
        "{} – {}",
        job.date_start,
        job.date_end.as_deref().unwrap_or("present")
    )
}
