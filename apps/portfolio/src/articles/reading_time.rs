use std::sync::LazyLock;

use regex::Regex;

const WORDS_PER_MINUTE: usize = 200;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Estimated minutes to read a pre-rendered HTML body. 0 when there is no
/// text at all, otherwise at least 1.
pub fn estimate_minutes(html: &str) -> u32 {
    let text = TAG_RE.replace_all(html, " ");
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0;
    }
    words.div_ceil(WORDS_PER_MINUTE) as u32
}
