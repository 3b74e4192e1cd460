use crate::{
    application::services::SavedPostService,
    domain::entities::User,
    presentation::dto::{
        saved_post_dto::{SavePostRequest, SavedPostEntryResponse, UnsavePostRequest},
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct SavedPostHandler {
    saved_post_service: Arc<SavedPostService>,
}

impl SavedPostHandler {
    pub fn new(saved_post_service: Arc<SavedPostService>) -> Self {
        Self { saved_post_service }
    }

    pub async fn save_post(&self, request: SavePostRequest, viewer: &User) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.saved_post_service
            .save_post(viewer, &request.post_id, &request.title, &request.author_name)
            .await
    }

    pub async fn unsave_post(
        &self,
        request: UnsavePostRequest,
        viewer: &User,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.saved_post_service
            .unsave_post(viewer, &request.post_id)
            .await
    }

    pub async fn is_saved(&self, post_id: &str, viewer: &User) -> Result<bool, AppError> {
        self.saved_post_service.is_saved(viewer, post_id).await
    }

    pub async fn dashboard(&self, viewer: &User) -> Result<Vec<SavedPostEntryResponse>, AppError> {
        let entries = self.saved_post_service.dashboard(viewer).await?;
        Ok(entries
            .into_iter()
            .map(SavedPostEntryResponse::from)
            .collect())
    }
}
