use super::post_dto::PostResponse;
use crate::domain::entities::Post;
use crate::domain::feed::SortKey;
use crate::domain::value_objects::TagFilterSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SetSearchTermRequest {
    #[serde(default)]
    pub term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetSortKeyRequest {
    pub sort_key: SortKey,
}

#[derive(Debug, Deserialize)]
pub struct AddTagFilterRequest {
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveTagFilterRequest {
    pub index: usize,
}

/// フィード画面が一度に必要とするもの一式
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
    pub active_filters: Vec<String>,
}

impl FeedResponse {
    pub fn new(posts: Vec<Post>, filters: &TagFilterSet) -> Self {
        Self {
            posts: posts.into_iter().map(PostResponse::from).collect(),
            active_filters: filters.as_slice().to_vec(),
        }
    }
}
