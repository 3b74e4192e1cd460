use super::post_dto::PostResponse;
use super::Validate;
use crate::domain::entities::SavedPostEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SavePostRequest {
    pub post_id: String,
    pub title: String,
    pub author_name: String,
}

impl Validate for SavePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UnsavePostRequest {
    pub post_id: String,
}

impl Validate for UnsavePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SavedPostEntryResponse {
    pub post: PostResponse,
    pub saved_at: i64,
}

impl From<SavedPostEntry> for SavedPostEntryResponse {
    fn from(entry: SavedPostEntry) -> Self {
        Self {
            post: PostResponse::from(entry.post),
            saved_at: entry.saved_at.timestamp(),
        }
    }
}
