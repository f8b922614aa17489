use crate::models::{Length, Platform, Tone};

/// Builds the single natural-language prompt sent to the generation
/// backends. Pure string assembly: the platform contributes its
/// character limit, the length its instructional phrase, and the model
/// is asked to number each variation so the parser can split them.
pub fn build_prompt(
    topic: &str,
    platform: Platform,
    tone: Tone,
    length: Length,
    count: u8,
) -> String {
    format!(
        "Create {count} engaging social media posts for {platform} about \"{topic}\".\n\n\
         Requirements:\n\
         - Tone: {tone}\n\
         - Length: {guide}\n\
         - Character limit: {limit} characters\n\
         - Each post should be unique and creative\n\
         - Include relevant hashtags when appropriate\n\
         - Make them engaging and shareable\n\
         - Ensure they fit the {platform} audience and style\n\n\
         Please provide {count} different variations, each on a new line, numbered 1., 2., etc.",
        guide = length.guide(),
        limit = platform.character_limit(),
    )
}
