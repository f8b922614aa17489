use regex::Regex;
use std::sync::LazyLock;

// Numbered-list boundary the prompt asks the model to emit: "1. ", "2. ", ...
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\s").unwrap());

/// Splits raw model output into at most `count` trimmed, non-empty
/// drafts. If the model ignored the numbering instruction the whole
/// trimmed text comes back as a single draft; the result is never
/// empty. Segments beyond `count` are dropped.
pub fn parse_posts(raw: &str, count: usize) -> Vec<String> {
    let posts: Vec<String> = NUMBERED
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(count)
        .map(str::to_owned)
        .collect();

    if posts.is_empty() {
        vec![raw.trim().to_owned()]
    } else {
        posts
    }
}
