use crate::application::ports::repositories::{PostRepository, SavedPostRepository};
use crate::domain::entities::{SavedPost, SavedPostEntry, User};
use crate::shared::error::AppError;
use futures::future::join_all;
use std::sync::Arc;
use tracing::warn;

/// ユーザーごとの保存投稿（ダッシュボード）を扱うサービス
pub struct SavedPostService {
    saved: Arc<dyn SavedPostRepository>,
    posts: Arc<dyn PostRepository>,
}

impl SavedPostService {
    pub fn new(saved: Arc<dyn SavedPostRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { saved, posts }
    }

    /// 保存時に表示中のタイトルと著者名をスナップショットとして一緒に書く
    pub async fn save_post(
        &self,
        viewer: &User,
        post_id: &str,
        title: &str,
        author_name: &str,
    ) -> Result<(), AppError> {
        let saved = SavedPost::new(
            post_id.to_string(),
            title.to_string(),
            author_name.to_string(),
        );
        self.saved.set_saved_post(&viewer.id, &saved).await
    }

    pub async fn unsave_post(&self, viewer: &User, post_id: &str) -> Result<(), AppError> {
        self.saved.delete_saved_post(&viewer.id, post_id).await
    }

    pub async fn is_saved(&self, viewer: &User, post_id: &str) -> Result<bool, AppError> {
        self.saved.is_saved(&viewer.id, post_id).await
    }

    /// 保存レコードを生きている投稿と突き合わせる。
    /// 消えた投稿のレコードは落とすだけで、ダッシュボード全体は失敗させない。
    pub async fn dashboard(&self, viewer: &User) -> Result<Vec<SavedPostEntry>, AppError> {
        let saved = self.saved.list_saved_posts(&viewer.id).await?;

        let lookups = saved
            .iter()
            .map(|record| self.posts.get_post(&record.post_id));
        let results = join_all(lookups).await;

        let mut entries = Vec::with_capacity(saved.len());
        for (record, result) in saved.into_iter().zip(results) {
            match result {
                Ok(Some(post)) => entries.push(SavedPostEntry {
                    post,
                    saved_at: record.saved_at,
                }),
                // 参照先が消えている
                Ok(None) => {}
                Err(err) => {
                    warn!("Failed to load saved post {}: {err}", record.post_id);
                }
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::repositories::PostUpdate;
    use crate::domain::entities::Post;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    mock! {
        pub SavedRepo {}

        #[async_trait]
        impl SavedPostRepository for SavedRepo {
            async fn set_saved_post(&self, user_id: &str, saved: &SavedPost) -> Result<(), AppError>;
            async fn delete_saved_post(&self, user_id: &str, post_id: &str) -> Result<(), AppError>;
            async fn is_saved(&self, user_id: &str, post_id: &str) -> Result<bool, AppError>;
            async fn list_saved_posts(&self, user_id: &str) -> Result<Vec<SavedPost>, AppError>;
        }
    }

    mock! {
        pub PostRepo {}

        #[async_trait]
        impl PostRepository for PostRepo {
            async fn create_post(&self, post: &Post) -> Result<Post, AppError>;
            async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError>;
            async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, AppError>;
            async fn list_by_tags(&self, tags: &[String], limit: usize) -> Result<Vec<Post>, AppError>;
            async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError>;
            async fn update_post(&self, id: &str, update: &PostUpdate) -> Result<(), AppError>;
            async fn delete_post(&self, id: &str) -> Result<(), AppError>;
        }
    }

    fn viewer() -> User {
        User::new("u1".into(), "Mika".into(), "mika@example.com".into())
    }

    fn live_post(id: &str) -> Post {
        let mut post = Post::new(
            "Title".into(),
            "Body".into(),
            None,
            vec![],
            &viewer(),
            false,
        );
        post.id = id.to_string();
        post
    }

    #[tokio::test]
    async fn save_post_writes_snapshot_under_the_viewer() {
        let mut saved = MockSavedRepo::new();
        saved
            .expect_set_saved_post()
            .withf(|user_id, record| {
                user_id == "u1" && record.post_id == "p1" && record.title == "Title"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SavedPostService::new(Arc::new(saved), Arc::new(MockPostRepo::new()));
        service
            .save_post(&viewer(), "p1", "Title", "Mika")
            .await
            .expect("save");
    }

    #[tokio::test]
    async fn dashboard_drops_vanished_posts() {
        let mut saved = MockSavedRepo::new();
        saved.expect_list_saved_posts().times(1).returning(|_| {
            Ok(vec![
                SavedPost {
                    post_id: "alive".into(),
                    title: "Alive".into(),
                    author_name: "Mika".into(),
                    saved_at: Utc::now(),
                },
                SavedPost {
                    post_id: "deleted".into(),
                    title: "Deleted".into(),
                    author_name: "Mika".into(),
                    saved_at: Utc::now(),
                },
            ])
        });

        let mut posts = MockPostRepo::new();
        posts
            .expect_get_post()
            .with(eq("alive"))
            .times(1)
            .returning(|id| Ok(Some(live_post(id))));
        posts
            .expect_get_post()
            .with(eq("deleted"))
            .times(1)
            .returning(|_| Ok(None));

        let service = SavedPostService::new(Arc::new(saved), Arc::new(posts));
        let entries = service.dashboard(&viewer()).await.expect("dashboard");

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].post.id, "alive");
    }
}
