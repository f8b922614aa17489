use crate::models::{Favorite, Post, Settings};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GeneratePostsResponse {
    pub posts: Vec<String>,
}

/// Full per-user snapshot returned by the export endpoint.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub posts: Vec<Post>,
    pub favorites: Vec<Favorite>,
    pub settings: Option<Settings>,
    pub exported_at: String,
}
