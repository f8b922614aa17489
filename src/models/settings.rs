use crate::models::{Platform, Tone};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user preferences. Exactly one record per user, lazily created
/// with fixed defaults on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub user_id: Uuid,
    pub default_platform: Platform,
    pub default_tone: Tone,
    pub auto_save: bool,
    pub updated_at: i64,
}

impl Settings {
    /// Defaults: twitter / professional / auto-save on.
    pub fn defaults(user_id: Uuid) -> Self {
        Self {
            user_id,
            default_platform: Platform::Twitter,
            default_tone: Tone::Professional,
            auto_save: true,
            updated_at: Utc::now().timestamp_millis(),
        }
    }
}
