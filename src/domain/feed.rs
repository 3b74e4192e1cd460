use crate::domain::entities::Post;
use serde::{Deserialize, Serialize};

/// フィードの並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// 作成日時の新しい順（既定）
    #[default]
    Date,
    /// アップボート数の多い順
    Upvotes,
}

/// 取得済みスナップショットからフィードを組み立てる純関数。
/// 検索語でフィルタし、ソートキーで安定ソートする。
/// 同値キーは取得順を保つ。
pub fn compose(posts: &[Post], search_term: Option<&str>, sort_key: SortKey) -> Vec<Post> {
    let mut result: Vec<Post> = match search_term.map(str::trim) {
        Some(term) if !term.is_empty() => posts
            .iter()
            .filter(|post| post.matches_search(term))
            .cloned()
            .collect(),
        _ => posts.to_vec(),
    };

    match sort_key {
        SortKey::Upvotes => result.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
        SortKey::Date => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;
    use chrono::{Duration, Utc};

    fn post(id: &str, title: &str, tags: &[&str], upvotes: u32, age_minutes: i64) -> Post {
        let author = User::new("u1".into(), "Mika".into(), "mika@example.com".into());
        let mut post = Post::new(
            title.to_string(),
            "content".to_string(),
            None,
            tags.iter().map(|t| t.to_string()).collect(),
            &author,
            false,
        );
        post.id = id.to_string();
        post.upvotes = upvotes;
        post.created_at = Utc::now() - Duration::minutes(age_minutes);
        post
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let posts = vec![
            post("1", "Learning Kanji", &[], 0, 10),
            post("2", "French grammar tips", &[], 0, 5),
        ];
        let result = compose(&posts, Some("kanji"), SortKey::Date);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn search_matches_tags_and_author() {
        let posts = vec![
            post("1", "Untitled", &["kanji"], 0, 10),
            post("2", "Other", &["spanish"], 0, 5),
        ];
        assert_eq!(compose(&posts, Some("KANJI"), SortKey::Date).len(), 1);
        assert_eq!(compose(&posts, Some("mika"), SortKey::Date).len(), 2);
    }

    #[test]
    fn blank_search_keeps_everything() {
        let posts = vec![post("1", "A", &[], 0, 1), post("2", "B", &[], 0, 2)];
        assert_eq!(compose(&posts, Some("   "), SortKey::Date).len(), 2);
        assert_eq!(compose(&posts, None, SortKey::Date).len(), 2);
    }

    #[test]
    fn upvote_sort_is_stable_for_equal_keys() {
        // id:1 は id:2 より古いが、同数アップボートなら取得順が保たれる
        let posts = vec![
            post("1", "A", &[], 5, 60),
            post("2", "B", &[], 5, 1),
            post("3", "C", &[], 9, 30),
        ];
        let result = compose(&posts, None, SortKey::Upvotes);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn date_sort_is_newest_first() {
        let posts = vec![post("old", "A", &[], 0, 120), post("new", "B", &[], 0, 1)];
        let result = compose(&posts, None, SortKey::Date);
        assert_eq!(result[0].id, "new");
    }
}
