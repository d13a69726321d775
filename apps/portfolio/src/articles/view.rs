//! Article list view-model: newest-first ordering, tag selection and free-text
//! search over the normalized article list.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::ArticleListItem;

/// Current search state of the article list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub query: String,
    pub active_tag: Option<String>,
}

impl ArticleFilter {
    pub fn new(query: impl Into<String>, active_tag: Option<String>) -> Self {
        Self {
            query: query.into(),
            active_tag,
        }
    }

    /// Trimmed, lower-cased query; empty means "no text filter".
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.active_tag.is_some()
    }

    /// Selecting the active tag again deselects it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.active_tag = None;
    }

    /// Sorts newest first, then keeps items passing both the tag and the text
    /// filter.
    pub fn apply<'a>(&self, articles: &'a [ArticleListItem]) -> Vec<&'a ArticleListItem> {
        let mut list: Vec<&ArticleListItem> = articles.iter().collect();
        sort_newest_first(&mut list);

        if let Some(tag) = &self.active_tag {
            list.retain(|a| a.tags.iter().any(|t| t == tag));
        }

        let query = self.normalized_query();
        if !query.is_empty() {
            list.retain(|a| haystack(a).contains(&query));
        }

        list
    }

    /// One-line description of what is being shown, e.g.
    /// `Showing 2 articles in azure matching "functions".`
    pub fn summary(&self, shown: usize) -> String {
        let mut line = format!(
            "Showing {shown} article{}",
            if shown == 1 { "" } else { "s" }
        );
        if let Some(tag) = &self.active_tag {
            line.push_str(&format!(" in {tag}"));
        }
        if !self.normalized_query().is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.query.trim()));
        }
        line.push('.');
        line
    }
}

fn haystack(article: &ArticleListItem) -> String {
    let tags = article.tags.join(" ");
    [
        article.title.as_str(),
        article.summary.as_str(),
        tags.as_str(),
        article.date.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Every distinct tag across the list, sorted.
pub fn all_tags(articles: &[ArticleListItem]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Stable sort, parseable dates descending, unparseable ones last in their
/// original relative order.
pub fn sort_newest_first(list: &mut [&ArticleListItem]) {
    list.sort_by(|a, b| compare_dates_desc(parse_date(&a.date), parse_date(&b.date)));
}

fn compare_dates_desc(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ta), Some(tb)) => tb.cmp(&ta),
    }
}

/// Best-effort date parsing to milliseconds since the epoch. Zone-less values
/// are read as UTC.
pub fn parse_date(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok())
        .or_else(|| year_only(s))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

/// Day-precision layouts tried in order. `%B` also accepts abbreviated
/// month names when parsing.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

fn year_only(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
}
