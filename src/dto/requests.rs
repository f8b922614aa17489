use crate::models::{Length, Platform, Tone};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct GeneratePostsRequest {
    #[validate(length(min = 1, message = "Topic must not be empty"))]
    pub topic: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub length: Length,
    #[validate(range(min = 1, max = 10, message = "Count must be between 1 and 10"))]
    pub count: u8,
}

/// Fields copied from a post when the user favorites it.
#[derive(Debug, Validate, Deserialize)]
pub struct AddFavoriteRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
    pub platform: Platform,
    pub tone: Tone,
    pub topic: String,
    pub character_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub default_platform: Platform,
    pub default_tone: Tone,
    pub auto_save: bool,
}

/// Plain data carried from the favorites request into the store.
#[derive(Debug, Clone)]
pub struct FavoriteInput {
    pub content: String,
    pub platform: Platform,
    pub tone: Tone,
    pub topic: String,
    pub character_count: usize,
}

impl From<AddFavoriteRequest> for FavoriteInput {
    fn from(req: AddFavoriteRequest) -> Self {
        Self {
            content: req.content,
            platform: req.platform,
            tone: req.tone,
            topic: req.topic,
            character_count: req.character_count,
        }
    }
}
