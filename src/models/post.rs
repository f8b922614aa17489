use crate::models::{Platform, Tone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated draft saved to the owning user's history.
/// Immutable once created, except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub platform: Platform,
    pub tone: Tone,
    pub topic: String,
    pub character_count: usize,
    pub created_at: i64,
}
