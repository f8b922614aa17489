use crate::models::{Length, Platform, Tone};

/// Deterministic synthetic drafts substituted when every generation
/// backend has failed, so the user-visible operation never fails
/// outright. The literal template phrasing is intentional and load
/// bearing: callers and tests rely on this exact shape.
pub fn fallback_posts(
    topic: &str,
    platform: Platform,
    tone: Tone,
    length: Length,
    count: u8,
) -> Vec<String> {
    let hashtag: String = topic.split_whitespace().collect();
    (1..=count)
        .map(|i| {
            format!(
                "Generated post {i} about {topic} for {platform}. \
                 This is a {tone} post with {length} length. \
                 #{hashtag} #SocialMedia"
            )
        })
        .collect()
}
