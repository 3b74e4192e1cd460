use async_trait::async_trait;
use lingora_lib::application::ports::notifier::UpvoteNotifier;
use lingora_lib::application::ports::repositories::{
    PostRepository, PostUpdate, UpvoteRepository,
};
use lingora_lib::domain::entities::{Post, UpvoteRecord, User};
use lingora_lib::domain::value_objects::UpvoteUpdate;
use lingora_lib::shared::error::AppError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub fn test_user(id: &str, name: &str) -> User {
    User::new(id.to_string(), name.to_string(), format!("{id}@example.com"))
}

pub fn test_post(id: &str, title: &str, tags: &[&str], author: &User) -> Post {
    let mut post = Post::new(
        title.to_string(),
        "content".to_string(),
        None,
        tags.iter().map(|t| t.to_string()).collect(),
        author,
        false,
    );
    post.id = id.to_string();
    post
}

/// カウンタとマーカーを別々に持つインメモリのアップボートストア。
/// 本物のストア同様、2 つの書き込みの間に原子性はない。
pub struct InMemoryUpvoteStore {
    counts: RwLock<HashMap<String, i64>>,
    records: RwLock<HashSet<(String, String)>>,
}

impl InMemoryUpvoteStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            counts: RwLock::new(HashMap::new()),
            records: RwLock::new(HashSet::new()),
        })
    }

    pub async fn seed_post(&self, post_id: &str, count: i64) {
        self.counts.write().await.insert(post_id.to_string(), count);
    }

    pub async fn count_of(&self, post_id: &str) -> i64 {
        self.counts.read().await.get(post_id).copied().unwrap_or(0)
    }

    pub async fn record_count(&self, post_id: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|(p, _)| p == post_id)
            .count()
    }
}

#[async_trait]
impl UpvoteRepository for InMemoryUpvoteStore {
    async fn set_upvote(&self, post_id: &str, record: &UpvoteRecord) -> Result<(), AppError> {
        self.records
            .write()
            .await
            .insert((post_id.to_string(), record.user_id.clone()));
        Ok(())
    }

    async fn delete_upvote(&self, post_id: &str, user_id: &str) -> Result<(), AppError> {
        self.records
            .write()
            .await
            .remove(&(post_id.to_string(), user_id.to_string()));
        Ok(())
    }

    async fn has_upvote(&self, post_id: &str, user_id: &str) -> Result<bool, AppError> {
        Ok(self
            .records
            .read()
            .await
            .contains(&(post_id.to_string(), user_id.to_string())))
    }

    async fn increment_count(&self, post_id: &str, delta: i64) -> Result<(), AppError> {
        let mut counts = self.counts.write().await;
        match counts.get_mut(post_id) {
            Some(count) => {
                *count += delta;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("post {post_id}"))),
        }
    }

    async fn get_count(&self, post_id: &str) -> Result<u32, AppError> {
        let counts = self.counts.read().await;
        match counts.get(post_id) {
            Some(count) => Ok((*count).max(0) as u32),
            None => Err(AppError::NotFound(format!("post {post_id}"))),
        }
    }
}

/// 通知をそのまま記録するフェイク
pub struct RecordingNotifier {
    updates: Mutex<Vec<(String, UpvoteUpdate)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            updates: Mutex::new(Vec::new()),
        })
    }

    pub fn updates(&self) -> Vec<(String, UpvoteUpdate)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpvoteNotifier for RecordingNotifier {
    async fn notify(&self, post_id: &str, update: &UpvoteUpdate) -> Result<(), AppError> {
        self.updates
            .lock()
            .unwrap()
            .push((post_id.to_string(), *update));
        Ok(())
    }
}

/// フィード取得用のインメモリ投稿ストア
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn with_posts(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            posts: RwLock::new(posts),
        })
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create_post(&self, post: &Post) -> Result<Post, AppError> {
        let mut created = post.clone();
        created.id = format!("post-{}", self.posts.read().await.len() + 1);
        self.posts.write().await.push(created.clone());
        Ok(created)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>, AppError> {
        let mut posts = self.posts.read().await.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn list_by_tags(&self, tags: &[String], limit: usize) -> Result<Vec<Post>, AppError> {
        // 和集合マッチ、順序不定（ここでは挿入順のまま返す）
        let posts: Vec<Post> = self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| post.tags.iter().any(|tag| tags.contains(tag)))
            .take(limit)
            .cloned()
            .collect();
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update_post(&self, id: &str, update: &PostUpdate) -> Result<(), AppError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;
        if let Some(title) = &update.title {
            post.title = title.clone();
        }
        if let Some(content) = &update.content {
            post.content = content.clone();
        }
        if let Some(tags) = &update.tags {
            post.tags = tags.clone();
        }
        if let Some(updated_at) = update.updated_at {
            post.updated_at = updated_at;
        }
        Ok(())
    }

    async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        self.posts.write().await.retain(|post| post.id != id);
        Ok(())
    }
}
