use crate::application::ports::cache::PostCache;
use crate::domain::entities::Post;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;

/// 容量上限付きの投稿キャッシュ
pub struct LruPostCache {
    inner: Mutex<LruCache<String, Post>>,
}

impl LruPostCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }
}

#[async_trait]
impl PostCache for LruPostCache {
    async fn add(&self, post: Post) {
        let mut cache = self.inner.lock().await;
        cache.put(post.id.clone(), post);
    }

    async fn get(&self, id: &str) -> Option<Post> {
        let mut cache = self.inner.lock().await;
        cache.get(id).cloned()
    }

    async fn remove(&self, id: &str) -> Option<Post> {
        let mut cache = self.inner.lock().await;
        cache.pop(id)
    }

    async fn clear(&self) {
        let mut cache = self.inner.lock().await;
        cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;

    fn test_post(id: &str) -> Post {
        let author = User::new("u1".into(), "Mika".into(), "mika@example.com".into());
        let mut post = Post::new("Title".into(), "Body".into(), None, vec![], &author, false);
        post.id = id.to_string();
        post
    }

    #[tokio::test]
    async fn add_and_get() {
        let cache = LruPostCache::new(4);
        cache.add(test_post("1")).await;
        assert!(cache.get("1").await.is_some());
        assert!(cache.get("2").await.is_none());
    }

    #[tokio::test]
    async fn capacity_evicts_least_recently_used() {
        let cache = LruPostCache::new(2);
        cache.add(test_post("1")).await;
        cache.add(test_post("2")).await;
        // "1" に触れて "2" を追い出し候補にする
        cache.get("1").await;
        cache.add(test_post("3")).await;

        assert!(cache.get("1").await.is_some());
        assert!(cache.get("2").await.is_none());
        assert!(cache.get("3").await.is_some());
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let cache = LruPostCache::new(4);
        cache.add(test_post("1")).await;
        assert!(cache.remove("1").await.is_some());
        cache.add(test_post("2")).await;
        cache.clear().await;
        assert!(cache.get("2").await.is_none());
    }
}
