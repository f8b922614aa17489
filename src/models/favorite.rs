use crate::models::{Platform, Tone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post copied into the user's favorites collection.
/// No two favorites for the same user may share identical content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub platform: Platform,
    pub tone: Tone,
    pub topic: String,
    pub character_count: usize,
    pub created_at: i64,
}
