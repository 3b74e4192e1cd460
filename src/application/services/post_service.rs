use crate::application::ports::cache::PostCache;
use crate::application::ports::repositories::{CommentRepository, PostRepository, PostUpdate};
use crate::domain::entities::{comment, Comment, Post, User, ANONYMOUS_AUTHOR};
use crate::shared::error::AppError;
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// 投稿編集フォームから渡ってくる変更内容。None のフィールドは触らない。
#[derive(Debug, Clone, Default)]
pub struct EditPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_anonymous: Option<bool>,
}

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    cache: Arc<dyn PostCache>,
    fetch_cap: usize,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        cache: Arc<dyn PostCache>,
        fetch_cap: usize,
    ) -> Self {
        Self {
            posts,
            comments,
            cache,
            fetch_cap,
        }
    }

    pub async fn create_post(
        &self,
        title: String,
        content: String,
        image_url: Option<String>,
        tags: Vec<String>,
        viewer: &User,
        is_anonymous: bool,
    ) -> Result<Post, AppError> {
        let title = title.trim().to_string();
        let content = content.trim().to_string();
        if title.is_empty() || content.is_empty() {
            return Err(AppError::InvalidInput(
                "title and content are required".to_string(),
            ));
        }

        let post = Post::new(title, content, image_url, tags, viewer, is_anonymous);
        let created = self.posts.create_post(&post).await?;
        info!("Post created: {}", created.id);

        self.cache.add(created.clone()).await;
        Ok(created)
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        // キャッシュから取得を試みる
        if let Some(post) = self.cache.get(id).await {
            return Ok(Some(post));
        }

        let post = self.posts.get_post(id).await?;
        if let Some(post) = &post {
            self.cache.add(post.clone()).await;
        }
        Ok(post)
    }

    /// 自分の投稿一覧。ストアからは順序不定で届くので、ここで新しい順に並べる。
    pub async fn posts_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError> {
        let mut posts = self.posts.list_by_author(author_id).await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// 著者本人だけが編集できる。匿名フラグの切り替えは表示名も書き換える。
    pub async fn update_post(
        &self,
        id: &str,
        changes: EditPost,
        viewer: &User,
    ) -> Result<(), AppError> {
        let existing = self
            .posts
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;
        if existing.author_id != viewer.id {
            return Err(AppError::Unauthorized(
                "only the author can edit this post".to_string(),
            ));
        }

        let author_name = match changes.is_anonymous {
            Some(true) => Some(ANONYMOUS_AUTHOR.to_string()),
            Some(false) => Some(viewer.display_name.clone()),
            None => None,
        };

        let update = PostUpdate {
            title: changes.title.map(|t| t.trim().to_string()),
            content: changes.content.map(|c| c.trim().to_string()),
            image_url: changes.image_url,
            tags: changes.tags.map(Post::normalize_tags),
            is_anonymous: changes.is_anonymous,
            author_name,
            updated_at: Some(Utc::now()),
        };

        self.posts.update_post(id, &update).await?;
        // 古い内容を返さないようにキャッシュから落とす
        self.cache.remove(id).await;
        Ok(())
    }

    pub async fn delete_post(&self, id: &str, viewer: &User) -> Result<(), AppError> {
        let existing = self
            .posts
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;
        if existing.author_id != viewer.id {
            return Err(AppError::Unauthorized(
                "only the author can delete this post".to_string(),
            ));
        }

        self.posts.delete_post(id).await?;
        self.cache.remove(id).await;
        info!("Post deleted: {id}");
        Ok(())
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        content: String,
        viewer: &User,
        is_anonymous: bool,
    ) -> Result<String, AppError> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::InvalidInput("comment is empty".to_string()));
        }

        let comment = Comment::new(content, viewer, is_anonymous);
        self.comments.add_comment(post_id, &comment).await
    }

    /// コメント一覧。古い順、created_at 欠損は末尾。
    pub async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, AppError> {
        let mut comments = self.comments.list_comments(post_id).await?;
        comment::sort_oldest_first(&mut comments);
        Ok(comments)
    }

    /// フィード上の全投稿から重複なしのタグ一覧を作る（辞書順）
    pub async fn all_tags(&self) -> Result<Vec<String>, AppError> {
        let posts = self.posts.list_recent(self.fetch_cap).await?;
        let tags: BTreeSet<String> = posts
            .into_iter()
            .flat_map(|post| post.tags)
            .map(|tag| tag.to_lowercase())
            .collect();
        Ok(tags.into_iter().collect())
    }
}
