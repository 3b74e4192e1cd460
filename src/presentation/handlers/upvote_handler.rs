use crate::{
    application::services::UpvoteService,
    domain::entities::User,
    presentation::dto::{
        upvote_dto::{
            ToggleUpvoteRequest, UpvoteUpdateResponse, UpvoteViewRequest, UpvoteViewResponse,
        },
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct UpvoteHandler {
    upvote_service: Arc<UpvoteService>,
}

impl UpvoteHandler {
    pub fn new(upvote_service: Arc<UpvoteService>) -> Self {
        Self { upvote_service }
    }

    /// トグルの終端状態を返す。途中の Optimistic はイベントで届く。
    pub async fn toggle_upvote(
        &self,
        request: ToggleUpvoteRequest,
        viewer: Option<&User>,
    ) -> Result<UpvoteUpdateResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let update = self
            .upvote_service
            .toggle_upvote(&request.post_id, request.view(), viewer)
            .await?;
        Ok(UpvoteUpdateResponse::from(update))
    }

    /// マウント時の初期表示状態
    pub async fn upvote_view(
        &self,
        request: UpvoteViewRequest,
        viewer: Option<&User>,
    ) -> Result<UpvoteViewResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let view = self
            .upvote_service
            .upvote_view(&request.post_id, viewer)
            .await?;
        Ok(UpvoteViewResponse::from(view))
    }
}
