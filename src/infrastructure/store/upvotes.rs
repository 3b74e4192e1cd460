use super::client::DocStoreClient;
use super::mapper::to_document;
use crate::application::ports::repositories::UpvoteRepository;
use crate::domain::entities::UpvoteRecord;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct StoreUpvoteRepository {
    client: Arc<DocStoreClient>,
}

impl StoreUpvoteRepository {
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }

    fn record_path(post_id: &str, user_id: &str) -> String {
        format!("posts/{post_id}/upvotes/{user_id}")
    }
}

#[async_trait]
impl UpvoteRepository for StoreUpvoteRepository {
    async fn set_upvote(&self, post_id: &str, record: &UpvoteRecord) -> Result<(), AppError> {
        let body = to_document(record, false)?;
        self.client
            .set_document(&Self::record_path(post_id, &record.user_id), &body)
            .await
    }

    async fn delete_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError> {
        self.client
            .delete_document(&Self::record_path(post_id, user_id))
            .await
    }

    async fn has_upvote(&self, post_id: &str, user_id: &str) -> Result<bool, AppError> {
        let doc = self
            .client
            .get_document(&Self::record_path(post_id, user_id))
            .await?;
        Ok(doc.is_some())
    }

    async fn increment_count(&self, post_id: &str, delta: i64) -> Result<(), AppError> {
        self.client
            .increment_field(&format!("posts/{post_id}"), "upvotes", delta)
            .await
    }

    async fn get_count(&self, post_id: &str) -> Result<u32, AppError> {
        let doc = self
            .client
            .get_document(&format!("posts/{post_id}"))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {post_id}")))?;
        // 欠損や（ドリフトで）負になった値は 0 扱い
        let count = doc
            .get("upvotes")
            .and_then(Value::as_i64)
            .unwrap_or(0)
            .max(0);
        Ok(count as u32)
    }
}
