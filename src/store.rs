use crate::dto::FavoriteInput;
use crate::errors::ApiError;
use crate::models::{Favorite, Platform, Post, Settings, Tone};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-process document store: one thread-safe map per collection.
/// Posts and favorites are keyed by record id with a `user_id` foreign
/// key; settings are keyed by user id directly, which makes the
/// one-record-per-user invariant structural. Every operation takes the
/// caller's user id and only ever touches that user's records.
#[derive(Clone, Default)]
pub struct Store {
    posts: Arc<DashMap<Uuid, Post>>,
    favorites: Arc<DashMap<Uuid, Favorite>>,
    settings: Arc<DashMap<Uuid, Settings>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// All of the caller's posts, newest first.
    pub fn list_posts(&self, user_id: Uuid) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// All of the caller's favorites, newest first.
    pub fn list_favorites(&self, user_id: Uuid) -> Vec<Favorite> {
        let mut favorites: Vec<Favorite> = self
            .favorites
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        favorites
    }

    /// Bulk-inserts one history record per draft, stamped with the
    /// caller's id and the current time.
    pub fn save_generated_posts(
        &self,
        user_id: Uuid,
        drafts: &[String],
        platform: Platform,
        tone: Tone,
        topic: &str,
    ) -> Vec<Post> {
        let created_at = Utc::now().timestamp_millis();
        let posts: Vec<Post> = drafts
            .iter()
            .map(|content| Post {
                id: Uuid::new_v4(),
                user_id,
                content: content.clone(),
                platform,
                tone,
                topic: topic.to_string(),
                character_count: content.chars().count(),
                created_at,
            })
            .collect();

        for post in &posts {
            self.posts.insert(post.id, post.clone());
        }
        posts
    }

    /// Copies a post into the favorites collection. A favorite with
    /// identical content already held by the caller rejects the insert.
    pub fn add_favorite(&self, user_id: Uuid, input: FavoriteInput) -> Result<Favorite, ApiError> {
        let duplicate = self.favorites.iter().any(|entry| {
            entry.value().user_id == user_id && entry.value().content == input.content
        });
        if duplicate {
            return Err(ApiError::DuplicateFavorite);
        }

        let favorite = Favorite {
            id: Uuid::new_v4(),
            user_id,
            content: input.content,
            platform: input.platform,
            tone: input.tone,
            topic: input.topic,
            character_count: input.character_count,
            created_at: Utc::now().timestamp_millis(),
        };
        self.favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    /// Delete-by-id scoped to the caller. Missing or foreign ids are a
    /// silent no-op; returns the number of records removed (0 or 1).
    pub fn remove_favorite(&self, user_id: Uuid, id: Uuid) -> usize {
        match self
            .favorites
            .remove_if(&id, |_, favorite| favorite.user_id == user_id)
        {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Same idempotent contract as `remove_favorite`.
    pub fn delete_post(&self, user_id: Uuid, id: Uuid) -> usize {
        match self.posts.remove_if(&id, |_, post| post.user_id == user_id) {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Returns the caller's settings, lazily inserting the fixed
    /// defaults (twitter / professional / auto-save on) exactly once.
    pub fn get_or_create_settings(&self, user_id: Uuid) -> Settings {
        self.settings
            .entry(user_id)
            .or_insert_with(|| Settings::defaults(user_id))
            .value()
            .clone()
    }

    /// Upsert by caller id, stamping `updated_at`.
    pub fn update_settings(
        &self,
        user_id: Uuid,
        default_platform: Platform,
        default_tone: Tone,
        auto_save: bool,
    ) -> Settings {
        let settings = Settings {
            user_id,
            default_platform,
            default_tone,
            auto_save,
            updated_at: Utc::now().timestamp_millis(),
        };
        self.settings.insert(user_id, settings.clone());
        settings
    }

    /// Snapshot of everything the caller owns.
    pub fn export_all(&self, user_id: Uuid) -> (Vec<Post>, Vec<Favorite>, Option<Settings>) {
        let posts = self.list_posts(user_id);
        let favorites = self.list_favorites(user_id);
        let settings = self.settings.get(&user_id).map(|entry| entry.value().clone());
        (posts, favorites, settings)
    }

    /// Deletes the caller's records from all three collections. The
    /// three deletes run concurrently with no cross-collection
    /// transaction: a crash mid-way can leave a partial clear.
    pub async fn clear_all(&self, user_id: Uuid) -> Result<(), ApiError> {
        let posts = Arc::clone(&self.posts);
        let favorites = Arc::clone(&self.favorites);
        let settings = Arc::clone(&self.settings);

        let (a, b, c) = tokio::join!(
            tokio::task::spawn_blocking(move || {
                posts.retain(|_, post| post.user_id != user_id);
            }),
            tokio::task::spawn_blocking(move || {
                favorites.retain(|_, favorite| favorite.user_id != user_id);
            }),
            tokio::task::spawn_blocking(move || {
                settings.remove(&user_id);
            }),
        );
        for result in [a, b, c] {
            result.map_err(|e| ApiError::InternalError(format!("clear task failed: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_input(content: &str) -> FavoriteInput {
        FavoriteInput {
            content: content.to_string(),
            platform: Platform::Twitter,
            tone: Tone::Casual,
            topic: "testing".to_string(),
            character_count: content.chars().count(),
        }
    }

    #[test]
    fn posts_are_scoped_and_sorted_newest_first() {
        let store = Store::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.save_generated_posts(alice, &["a1".into()], Platform::Twitter, Tone::Casual, "t");
        store.save_generated_posts(bob, &["b1".into()], Platform::Twitter, Tone::Casual, "t");
        store.save_generated_posts(alice, &["a2".into()], Platform::Twitter, Tone::Casual, "t");

        let posts = store.list_posts(alice);
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.user_id == alice));
        assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn saved_posts_derive_character_count() {
        let store = Store::new();
        let user = Uuid::new_v4();
        let saved = store.save_generated_posts(
            user,
            &["héllo".into()],
            Platform::Tiktok,
            Tone::Funny,
            "greetings",
        );
        assert_eq!(saved[0].character_count, 5);
        assert_eq!(saved[0].topic, "greetings");
    }

    #[test]
    fn duplicate_favorite_is_rejected() {
        let store = Store::new();
        let user = Uuid::new_v4();

        store.add_favorite(user, draft_input("same content")).unwrap();
        let err = store
            .add_favorite(user, draft_input("same content"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateFavorite));
        assert_eq!(store.list_favorites(user).len(), 1);
    }

    #[test]
    fn same_content_allowed_for_different_users() {
        let store = Store::new();
        store
            .add_favorite(Uuid::new_v4(), draft_input("shared"))
            .unwrap();
        store
            .add_favorite(Uuid::new_v4(), draft_input("shared"))
            .unwrap();
    }

    #[test]
    fn deleting_foreign_post_is_a_silent_noop() {
        let store = Store::new();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let saved =
            store.save_generated_posts(owner, &["mine".into()], Platform::Twitter, Tone::Casual, "t");

        assert_eq!(store.delete_post(intruder, saved[0].id), 0);
        assert_eq!(store.list_posts(owner).len(), 1);

        assert_eq!(store.delete_post(owner, saved[0].id), 1);
        assert_eq!(store.delete_post(owner, saved[0].id), 0);
    }

    #[test]
    fn removing_missing_favorite_is_a_silent_noop() {
        let store = Store::new();
        assert_eq!(store.remove_favorite(Uuid::new_v4(), Uuid::new_v4()), 0);
    }

    #[test]
    fn settings_created_lazily_exactly_once() {
        let store = Store::new();
        let user = Uuid::new_v4();

        let first = store.get_or_create_settings(user);
        assert_eq!(first.default_platform, Platform::Twitter);
        assert_eq!(first.default_tone, Tone::Professional);
        assert!(first.auto_save);

        let second = store.get_or_create_settings(user);
        assert_eq!(second.updated_at, first.updated_at);
    }

    #[test]
    fn update_settings_upserts_for_caller() {
        let store = Store::new();
        let user = Uuid::new_v4();

        let updated = store.update_settings(user, Platform::Linkedin, Tone::Inspiring, false);
        assert_eq!(updated.default_platform, Platform::Linkedin);
        assert!(!updated.auto_save);

        let read_back = store.get_or_create_settings(user);
        assert_eq!(read_back.default_tone, Tone::Inspiring);
    }

    #[tokio::test]
    async fn clear_all_empties_only_the_caller() {
        let store = Store::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.save_generated_posts(alice, &["p1".into(), "p2".into()], Platform::Twitter, Tone::Casual, "t");
        store.add_favorite(alice, draft_input("fav")).unwrap();
        store.get_or_create_settings(alice);
        store.save_generated_posts(bob, &["keep".into()], Platform::Facebook, Tone::Casual, "t");

        store.clear_all(alice).await.unwrap();

        let (posts, favorites, settings) = store.export_all(alice);
        assert!(posts.is_empty());
        assert!(favorites.is_empty());
        assert!(settings.is_none());
        assert_eq!(store.list_posts(bob).len(), 1);
    }

    #[test]
    fn export_snapshot_contains_all_collections() {
        let store = Store::new();
        let user = Uuid::new_v4();
        store.save_generated_posts(user, &["p".into()], Platform::Twitter, Tone::Casual, "t");
        store.add_favorite(user, draft_input("f")).unwrap();
        store.update_settings(user, Platform::Tiktok, Tone::Funny, true);

        let (posts, favorites, settings) = store.export_all(user);
        assert_eq!(posts.len(), 1);
        assert_eq!(favorites.len(), 1);
        assert_eq!(settings.unwrap().default_platform, Platform::Tiktok);
    }
}
