use super::client::{DocStoreClient, OrderBy, QueryFilter, StoreQuery};
use super::mapper::{from_document, to_document};
use crate::application::ports::repositories::{PostRepository, PostUpdate};
use crate::domain::entities::Post;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// 著者別一覧はフィードより広めに読む
const AUTHOR_FETCH_LIMIT: usize = 100;

pub struct StorePostRepository {
    client: Arc<DocStoreClient>,
}

impl StorePostRepository {
    pub fn new(client: Arc<DocStoreClient>) -> Self {
        Self { client }
    }

    fn update_body(update: &PostUpdate) -> Value {
        let mut body = Map::new();
        if let Some(title) = &update.title {
            body.insert("title".to_string(), json!(title));
        }
        if let Some(content) = &update.content {
            body.insert("content".to_string(), json!(content));
        }
        if let Some(image_url) = &update.image_url {
            body.insert("image_url".to_string(), json!(image_url));
        }
        if let Some(tags) = &update.tags {
            body.insert("tags".to_string(), json!(tags));
        }
        if let Some(is_anonymous) = update.is_anonymous {
            body.insert("is_anonymous".to_string(), json!(is_anonymous));
        }
        if let Some(author_name) = &update.author_name {
            body.insert("author_name".to_string(), json!(author_name));
        }
        if let Some(updated_at) = &update.updated_at {
            body.insert("updated_at".to_string(), json!(updated_at));
        }
        Value::Object(body)
    }

    fn posts_from_documents(documents: Vec<Value>) -> Result<Vec<Post>, AppError> {
        documents.into_iter().map(from_document).collect()
    }
}

#[async_trait]
impl PostRepository for StorePostRepository {
    async fn create_post(&self, post: &Post) -> Result<Post, AppError> {
        let body = to_document(post, true)?;
        let id = self.client.create_document("posts", &body).await?;
        let mut created = post.clone();
        created.id = id;
        Ok(created)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        match self.client.get_document(&format!("posts/{id}")).await? {
            Some(doc) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, AppError> {
        let query = StoreQuery {
            filter: None,
            order_by: Some(OrderBy::desc("created_at")),
            limit: Some(limit),
        };
        Self::posts_from_documents(self.client.query("posts", &query).await?)
    }

    async fn list_by_tags(&self, tags: &[String], limit: usize) -> Result<Vec<Post>, AppError> {
        // 和集合フィルタとストア側ソートは併用できないので order_by は付けない
        let query = StoreQuery {
            filter: Some(QueryFilter::ArrayContainsAny {
                field: "tags".to_string(),
                values: tags.to_vec(),
            }),
            order_by: None,
            limit: Some(limit),
        };
        Self::posts_from_documents(self.client.query("posts", &query).await?)
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError> {
        let query = StoreQuery {
            filter: Some(QueryFilter::Eq {
                field: "author_id".to_string(),
                value: json!(author_id),
            }),
            order_by: None,
            limit: Some(AUTHOR_FETCH_LIMIT),
        };
        Self::posts_from_documents(self.client.query("posts", &query).await?)
    }

    async fn update_post(&self, id: &str, update: &PostUpdate) -> Result<(), AppError> {
        self.client
            .patch_document(&format!("posts/{id}"), &Self::update_body(update))
            .await
    }

    async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        self.client.delete_document(&format!("posts/{id}")).await
    }
}
