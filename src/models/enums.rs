use serde::{Deserialize, Serialize};
use std::fmt;

/// Target social network for a draft. Each platform carries a fixed
/// character limit that is embedded into the generation prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
    Tiktok,
}

impl Platform {
    pub fn character_limit(self) -> u32 {
        match self {
            Platform::Twitter => 280,
            Platform::Facebook => 2000,
            Platform::Instagram => 2200,
            Platform::Linkedin => 1300,
            Platform::Tiktok => 150,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stylistic register requested for generated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Funny,
    Inspiring,
    Educational,
    Promotional,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Funny => "funny",
            Tone::Inspiring => "inspiring",
            Tone::Educational => "educational",
            Tone::Promotional => "promotional",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested length of a draft, mapped to an instructional phrase
/// in the prompt rather than a hard limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn guide(self) -> &'static str {
        match self {
            Length::Short => "Keep it concise and punchy",
            Length::Medium => "Provide a good balance of detail and brevity",
            Length::Long => "Include more detail and context",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
