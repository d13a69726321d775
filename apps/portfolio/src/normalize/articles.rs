use serde_json::Value;

use crate::models::{Article, ArticleListItem};
use crate::normalize::{str_field, string_list_field};

/// Unwraps the list envelope: a bare array, `{ "items": [...] }` or
/// `{ "value": [...] }`, tried in that order. Anything else is empty.
fn coerce_list_payload(raw: &Value) -> &[Value] {
    if let Some(items) = raw.as_array() {
        return items;
    }
    for key in ["items", "value"] {
        if let Some(items) = raw.get(key).and_then(Value::as_array) {
            return items;
        }
    }
    &[]
}

pub fn normalize_article_list_item(raw: &Value) -> ArticleListItem {
    ArticleListItem {
        slug: str_field(raw, "slug"),
        title: str_field(raw, "title"),
        date: str_field(raw, "date"),
        summary: str_field(raw, "summary"),
        tags: string_list_field(raw, "tags"),
    }
}

pub fn normalize_article_list(raw: &Value) -> Vec<ArticleListItem> {
    coerce_list_payload(raw)
        .iter()
        .map(normalize_article_list_item)
        .collect()
}

pub fn normalize_article(raw: &Value) -> Article {
    Article {
        meta: normalize_article_list_item(raw),
        content_html: str_field(raw, "contentHtml"),
    }
}
