use crate::{
    application::services::FeedService,
    presentation::dto::feed_dto::{
        AddTagFilterRequest, FeedResponse, RemoveTagFilterRequest, SetSearchTermRequest,
        SetSortKeyRequest,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct FeedHandler {
    feed_service: Arc<FeedService>,
}

impl FeedHandler {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    async fn respond(&self, posts: Vec<crate::domain::entities::Post>) -> FeedResponse {
        let filters = self.feed_service.active_filters().await;
        FeedResponse::new(posts, &filters)
    }

    pub async fn refresh(&self) -> Result<FeedResponse, AppError> {
        let posts = self.feed_service.refresh().await?;
        Ok(self.respond(posts).await)
    }

    pub async fn set_search_term(&self, request: SetSearchTermRequest) -> FeedResponse {
        let posts = self.feed_service.set_search_term(request.term).await;
        self.respond(posts).await
    }

    pub async fn set_sort_key(&self, request: SetSortKeyRequest) -> FeedResponse {
        let posts = self.feed_service.set_sort_key(request.sort_key).await;
        self.respond(posts).await
    }

    pub async fn add_tag_filter(
        &self,
        request: AddTagFilterRequest,
    ) -> Result<FeedResponse, AppError> {
        let posts = self.feed_service.add_tag_filter(&request.tag).await?;
        Ok(self.respond(posts).await)
    }

    pub async fn remove_tag_filter(
        &self,
        request: RemoveTagFilterRequest,
    ) -> Result<FeedResponse, AppError> {
        let posts = self.feed_service.remove_tag_filter(request.index).await?;
        Ok(self.respond(posts).await)
    }

    pub async fn clear_tag_filters(&self) -> Result<FeedResponse, AppError> {
        let posts = self.feed_service.clear_tag_filters().await?;
        Ok(self.respond(posts).await)
    }
}
