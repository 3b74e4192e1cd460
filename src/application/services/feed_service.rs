use crate::application::ports::repositories::PostRepository;
use crate::domain::entities::Post;
use crate::domain::feed::{self, SortKey};
use crate::domain::value_objects::TagFilterSet;
use crate::shared::error::AppError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// フィードを組み立てるサービス。
///
/// 取得（非同期・失敗しうる）と合成（純粋・同期）を分けて持つ:
/// - タグフィルタの変更は取得クエリの形が変わるので再取得
/// - 検索語・ソートキーの変更は手元のスナップショットの再合成だけ
struct FeedState {
    filters: TagFilterSet,
    search_term: Option<String>,
    sort_key: SortKey,
    /// 直近の取得結果（取得順のまま保持し、ソートの同値タイブレークに使う）
    snapshot: Vec<Post>,
}

pub struct FeedService {
    posts: Arc<dyn PostRepository>,
    fetch_cap: usize,
    state: RwLock<FeedState>,
}

impl FeedService {
    pub fn new(posts: Arc<dyn PostRepository>, fetch_cap: usize) -> Self {
        Self {
            posts,
            fetch_cap,
            state: RwLock::new(FeedState {
                filters: TagFilterSet::new(),
                search_term: None,
                sort_key: SortKey::default(),
                snapshot: Vec::new(),
            }),
        }
    }

    /// 現在のフィルタ集合で取り直す。失敗時はスナップショットを空にしてから
    /// エラーを返す（呼び出し側は同じ操作の再実行でリトライできる）。
    pub async fn refresh(&self) -> Result<Vec<Post>, AppError> {
        let mut state = self.state.write().await;

        let fetched = if state.filters.is_empty() {
            self.posts.list_recent(self.fetch_cap).await
        } else {
            // タグの和集合クエリはストア側でソートできないため順序不定で届く
            self.posts
                .list_by_tags(state.filters.as_slice(), self.fetch_cap)
                .await
        };

        match fetched {
            Ok(posts) => {
                debug!("Feed refreshed: {} posts", posts.len());
                state.snapshot = posts;
                Ok(Self::composed(&state))
            }
            Err(err) => {
                state.snapshot.clear();
                Err(err)
            }
        }
    }

    /// 検索語の変更。再取得はしない。
    pub async fn set_search_term(&self, term: Option<String>) -> Vec<Post> {
        let mut state = self.state.write().await;
        state.search_term = term.filter(|t| !t.trim().is_empty());
        Self::composed(&state)
    }

    /// ソートキーの変更。再取得はしない。
    pub async fn set_sort_key(&self, sort_key: SortKey) -> Vec<Post> {
        let mut state = self.state.write().await;
        state.sort_key = sort_key;
        Self::composed(&state)
    }

    /// タグフィルタの追加。集合が変わったときだけ再取得する。
    pub async fn add_tag_filter(&self, raw: &str) -> Result<Vec<Post>, AppError> {
        let changed = {
            let mut state = self.state.write().await;
            state.filters.add(raw)
        };
        if changed {
            self.refresh().await
        } else {
            Ok(self.current().await)
        }
    }

    /// 位置指定でタグフィルタを外して再取得する
    pub async fn remove_tag_filter(&self, index: usize) -> Result<Vec<Post>, AppError> {
        {
            let mut state = self.state.write().await;
            state.filters.remove_at(index);
        }
        self.refresh().await
    }

    pub async fn clear_tag_filters(&self) -> Result<Vec<Post>, AppError> {
        {
            let mut state = self.state.write().await;
            if state.filters.is_empty() {
                return Ok(Self::composed(&state));
            }
            state.filters.clear();
        }
        self.refresh().await
    }

    /// 再取得せずに現在のスナップショットを合成して返す
    pub async fn current(&self) -> Vec<Post> {
        let state = self.state.read().await;
        Self::composed(&state)
    }

    pub async fn active_filters(&self) -> TagFilterSet {
        self.state.read().await.filters.clone()
    }

    fn composed(state: &FeedState) -> Vec<Post> {
        feed::compose(
            &state.snapshot,
            state.search_term.as_deref(),
            state.sort_key,
        )
    }
}
