use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub slug: String,
    pub title: String,
    /// Free text, usually ISO-8601. Parsed best-effort only when sorting.
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(flatten)]
    pub meta: ArticleListItem,
    /// Pre-rendered HTML body.
    pub content_html: String,
}

impl Article {
    pub fn reading_time_minutes(&self) -> u32 {
        crate::articles::reading_time::estimate_minutes(&self.content_html)
    }
}
