use super::client::{DocStoreClient, OrderBy, StoreQuery};
use super::mapper::{from_document, to_document};
use crate::application::ports::repositories::SavedPostRepository;
use crate::domain::entities::SavedPost;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub struct StoreSavedPostRepository {
    client: Arc<DocStoreClient>,
}

impl StoreSavedPostRepository {
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }

    fn record_path(user_id: &str, post_id: &str) -> String {
        format!("users/{user_id}/saved_posts/{post_id}")
    }
}

#[async_trait]
impl SavedPostRepository for StoreSavedPostRepository {
    async fn set_saved_post(&self, user_id: &str, saved: &SavedPost) -> Result<(), AppError> {
        let body = to_document(saved, false)?;
        self.client
            .set_document(&Self::record_path(user_id, &saved.post_id), &body)
            .await
    }

    async fn delete_saved_post(&self, user_id: &str, post_id: &str) -> Result<(), AppError> {
        self.client
            .delete_document(&Self::record_path(user_id, post_id))
            .await
    }

    async fn is_saved(&self, user_id: &str, post_id: &str) -> Result<bool, AppError> {
        let doc = self
            .client
            .get_document(&Self::record_path(user_id, post_id))
            .await?;
        Ok(doc.is_some())
    }

    async fn list_saved_posts(&self, user_id: &str) -> Result<Vec<SavedPost>, AppError> {
        let query = StoreQuery {
            filter: None,
            order_by: Some(OrderBy::desc("saved_at")),
            limit: None,
        };
        let documents = self
            .client
            .query(&format!("users/{user_id}/saved_posts"), &query)
            .await?;
        documents.into_iter().map(from_document).collect()
    }
}
