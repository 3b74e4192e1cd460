use super::client::{DocStoreClient, StoreQuery};
use super::mapper::{from_document, to_document};
use crate::application::ports::repositories::CommentRepository;
use crate::domain::entities::Comment;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub struct StoreCommentRepository {
    client: Arc<DocStoreClient>,
}

impl StoreCommentRepository {
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentRepository for StoreCommentRepository {
    async fn add_comment(&self, post_id: &str, comment: &Comment) -> Result<String, AppError> {
        let body = to_document(comment, true)?;
        self.client
            .create_document(&format!("posts/{post_id}/comments"), &body)
            .await
    }

    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        // 並べ替えはアプリ側でやるので、そのまま全部読む
        let query = StoreQuery {
            filter: None,
            order_by: None,
            limit: None,
        };
        let documents = self
            .client
            .query(&format!("posts/{post_id}/comments"), &query)
            .await?;
        documents.into_iter().map(from_document).collect()
    }
}
