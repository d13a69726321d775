// Article reader: list filtering/sorting and per-article derived values.

pub mod reading_time;
pub mod view;

pub use view::{all_tags, ArticleFilter};
