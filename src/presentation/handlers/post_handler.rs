use crate::{
    application::services::post_service::{EditPost, PostService},
    domain::entities::User,
    presentation::dto::{
        post_dto::{
            AddCommentRequest, CommentResponse, CreatePostRequest, DeletePostRequest,
            PostResponse, UpdatePostRequest,
        },
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct PostHandler {
    post_service: Arc<PostService>,
}

impl PostHandler {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    pub async fn create_post(
        &self,
        request: CreatePostRequest,
        viewer: &User,
    ) -> Result<PostResponse, AppError> {
        // 入力検証
        request.validate().map_err(AppError::InvalidInput)?;

        let post = self
            .post_service
            .create_post(
                request.title,
                request.content,
                request.image_url,
                request.tags,
                viewer,
                request.is_anonymous,
            )
            .await?;

        Ok(PostResponse::from(post))
    }

    pub async fn get_post(&self, post_id: &str) -> Result<Option<PostResponse>, AppError> {
        let post = self.post_service.get_post(post_id).await?;
        Ok(post.map(PostResponse::from))
    }

    pub async fn my_posts(&self, viewer: &User) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.post_service.posts_by_author(&viewer.id).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    pub async fn update_post(
        &self,
        request: UpdatePostRequest,
        viewer: &User,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let changes = EditPost {
            title: request.title,
            content: request.content,
            image_url: request.image_url,
            tags: request.tags,
            is_anonymous: request.is_anonymous,
        };
        self.post_service
            .update_post(&request.post_id, changes, viewer)
            .await
    }

    pub async fn delete_post(
        &self,
        request: DeletePostRequest,
        viewer: &User,
    ) -> Result<(), AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.post_service
            .delete_post(&request.post_id, viewer)
            .await
    }

    pub async fn add_comment(
        &self,
        request: AddCommentRequest,
        viewer: &User,
    ) -> Result<String, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        self.post_service
            .add_comment(
                &request.post_id,
                request.content,
                viewer,
                request.is_anonymous,
            )
            .await
    }

    pub async fn comments_for_post(
        &self,
        post_id: &str,
    ) -> Result<Vec<CommentResponse>, AppError> {
        let comments = self.post_service.comments_for_post(post_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    pub async fn all_tags(&self) -> Result<Vec<String>, AppError> {
        self.post_service.all_tags().await
    }
}
