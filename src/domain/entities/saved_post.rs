use super::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ダッシュボード用のブックマークレコード。投稿の非正規化スナップショットを持つ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPost {
    pub post_id: String,
    pub title: String,
    pub author_name: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedPost {
    /// 保存時点の表示内容からスナップショットを作る
    pub fn new(post_id: String, title: String, author_name: String) -> Self {
        Self {
            post_id,
            title,
            author_name,
            saved_at: Utc::now(),
        }
    }
}

/// 保存レコードと生きている投稿を突き合わせた結果。
/// 参照先の投稿が消えている場合はエントリごと落とされる。
#[derive(Debug, Clone, Serialize)]
pub struct SavedPostEntry {
    pub post: Post,
    pub saved_at: DateTime<Utc>,
}
