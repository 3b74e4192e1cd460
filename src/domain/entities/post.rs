use super::user::User;
use crate::domain::value_objects::normalize_tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 匿名投稿の表示名
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// 正規化済み（小文字・トリム済み）のタグ
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: String,
    pub author_name: String,
    #[serde(default)]
    pub is_anonymous: bool,
    /// ストア上のカウンタ。欠損は 0 として扱う。
    #[serde(default)]
    pub upvotes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        title: String,
        content: String,
        image_url: Option<String>,
        tags: Vec<String>,
        author: &User,
        is_anonymous: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
            tags: Self::normalize_tags(tags),
            author_id: author.id.clone(),
            author_name: if is_anonymous {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                author.display_name.clone()
            },
            is_anonymous,
            upvotes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// タグを小文字・トリム済みに正規化し、空要素を落とす
    pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
        tags.into_iter()
            .filter_map(|tag| normalize_tag(&tag))
            .collect()
    }

    /// 検索語がタイトル・本文・著者名・タグのいずれかに含まれるか（大文字小文字を無視）
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.author_name.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }

    pub fn increment_upvotes(&mut self) {
        self.upvotes += 1;
    }

    pub fn decrement_upvotes(&mut self) {
        if self.upvotes > 0 {
            self.upvotes -= 1;
        }
    }
}
