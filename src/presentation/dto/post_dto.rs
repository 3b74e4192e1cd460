use super::Validate;
use crate::domain::entities::{Comment, Post};
use serde::{Deserialize, Serialize};

const MAX_TITLE_LEN: usize = 100;
const MAX_CONTENT_LEN: usize = 2000;
const MAX_COMMENT_LEN: usize = 500;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err("Title and content are required".to_string());
        }
        if self.title.len() > MAX_TITLE_LEN {
            return Err(format!("Title must be at most {MAX_TITLE_LEN} characters"));
        }
        if self.content.len() > MAX_CONTENT_LEN {
            return Err(format!(
                "Content must be at most {MAX_CONTENT_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub post_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_anonymous: Option<bool>,
}

impl Validate for UpdatePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        if let Some(title) = &self.title {
            if title.trim().is_empty() || title.len() > MAX_TITLE_LEN {
                return Err(format!(
                    "Title must be 1 to {MAX_TITLE_LEN} characters"
                ));
            }
        }
        if let Some(content) = &self.content {
            if content.trim().is_empty() || content.len() > MAX_CONTENT_LEN {
                return Err(format!(
                    "Content must be 1 to {MAX_CONTENT_LEN} characters"
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct DeletePostRequest {
    pub post_id: String,
}

impl Validate for DeletePostRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub post_id: String,
    pub content: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl Validate for AddCommentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("Comment is empty".to_string());
        }
        if self.content.len() > MAX_COMMENT_LEN {
            return Err(format!(
                "Comment must be at most {MAX_COMMENT_LEN} characters"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub author_name: String,
    pub is_anonymous: bool,
    pub upvotes: u32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            tags: post.tags,
            author_name: post.author_name,
            is_anonymous: post.is_anonymous,
            upvotes: post.upvotes,
            created_at: post.created_at.timestamp(),
            updated_at: post.updated_at.timestamp(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub author_name: String,
    pub created_at: Option<i64>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author_name: comment.author_name,
            created_at: comment.created_at.map(|at| at.timestamp()),
        }
    }
}
