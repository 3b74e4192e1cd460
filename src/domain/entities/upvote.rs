use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// (投稿, ユーザー) ごとのアップボートマーカー。存在そのものが「投票済み」を意味する。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpvoteRecord {
    pub user_id: String,
    pub upvoted_at: DateTime<Utc>,
}

impl UpvoteRecord {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            upvoted_at: Utc::now(),
        }
    }
}
