use super::post::ANONYMOUS_AUTHOR;
use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 投稿にぶら下がるコメント。追記専用で編集・削除はない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub author_name: String,
    /// 古いレコードには created_at が無いことがある
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn new(content: String, author: &User, is_anonymous: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content,
            author_id: author.id.clone(),
            author_name: if is_anonymous {
                ANONYMOUS_AUTHOR.to_string()
            } else {
                author.display_name.clone()
            },
            created_at: Some(Utc::now()),
        }
    }
}

/// コメントを古い順に並べる。created_at を持たないものは末尾に回す。
pub fn sort_oldest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn comment(id: &str, created_at: Option<DateTime<Utc>>) -> Comment {
        Comment {
            id: id.into(),
            content: "c".into(),
            author_id: "u1".into(),
            author_name: "Mika".into(),
            created_at,
        }
    }

    #[test]
    fn sort_puts_undated_comments_last() {
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();
        let mut comments = vec![
            comment("b", Some(t2)),
            comment("undated", None),
            comment("a", Some(t1)),
        ];
        sort_oldest_first(&mut comments);
        let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "undated"]);
    }
}
