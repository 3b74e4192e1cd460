use crate::domain::entities::{Comment, Post, SavedPost, UpvoteRecord};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// 投稿の部分更新。None のフィールドはストア上の値を保持する。
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_anonymous: Option<bool>,
    pub author_name: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// 投稿を永続化し、ストアが採番した ID 入りの投稿を返す
    async fn create_post(&self, post: &Post) -> Result<Post, AppError>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError>;
    /// 作成日時の新しい順（ストア側ソート）で最大 limit 件
    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, AppError>;
    /// 指定タグのいずれかを含む投稿（和集合）。ストア側のソートは効かないので順序不定。
    async fn list_by_tags(&self, tags: &[String], limit: usize) -> Result<Vec<Post>, AppError>;
    /// 著者指定。順序不定。
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError>;
    async fn update_post(&self, id: &str, update: &PostUpdate) -> Result<(), AppError>;
    async fn delete_post(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// コメントを追加し、採番された ID を返す
    async fn add_comment(&self, post_id: &str, comment: &Comment) -> Result<String, AppError>;
    /// 投稿のコメント一覧。順序不定。
    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, AppError>;
}

#[async_trait]
pub trait UpvoteRepository: Send + Sync {
    /// (post, user) のマーカーを書く。既にあれば上書きで冪等。
    async fn set_upvote(&self, post_id: &str, record: &UpvoteRecord) -> Result<(), AppError>;
    async fn delete_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError>;
    async fn has_upvote(&self, post_id: &str, user_id: &str) -> Result<bool, AppError>;
    /// 投稿のカウンタを delta だけ動かす（マーカー書き込みとは独立した呼び出し）
    async fn increment_count(&self, post_id: &str, delta: i64) -> Result<(), AppError>;
    /// ストアに記録されているカウンタ値
    async fn get_count(&self, post_id: &str) -> Result<u32, AppError>;
}

#[async_trait]
pub trait SavedPostRepository: Send + Sync {
    async fn set_saved_post(&self, user_id: &str, saved: &SavedPost) -> Result<(), AppError>;
    async fn delete_saved_post(&self, user_id: &str, post_id: &str) -> Result<(), AppError>;
    async fn is_saved(&self, user_id: &str, post_id: &str) -> Result<bool, AppError>;
    /// 保存日時の新しい順
    async fn list_saved_posts(&self, user_id: &str) -> Result<Vec<SavedPost>, AppError>;
}
