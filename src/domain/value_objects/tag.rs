use serde::{Deserialize, Serialize};

/// タグ入力を正規化する。トリムして小文字化し、空になったら None。
pub fn normalize_tag(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// フィードを絞り込むアクティブなタグ集合。
/// 挿入順を保ちつつ、正規化後の文字列で重複を弾く。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagFilterSet {
    tags: Vec<String>,
}

impl TagFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// タグを追加する。正規化後に空、または既に存在する場合は何もしない。
    /// 追加されたかどうかを返す。
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// 位置指定で削除する。範囲外は無視。
    pub fn remove_at(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_dedupes_case_insensitively() {
        let mut filters = TagFilterSet::new();
        assert!(filters.add(" French "));
        assert!(!filters.add("FRENCH"));
        assert!(!filters.add("french"));
        assert_eq!(filters.as_slice(), ["french"]);
    }

    #[test]
    fn add_rejects_blank_input() {
        let mut filters = TagFilterSet::new();
        assert!(!filters.add("   "));
        assert!(filters.is_empty());
    }

    #[test]
    fn remove_is_positional() {
        let mut filters = TagFilterSet::new();
        filters.add("french");
        filters.add("grammar");
        filters.add("kanji");
        filters.remove_at(1);
        assert_eq!(filters.as_slice(), ["french", "kanji"]);
        // 範囲外は無視される
        filters.remove_at(10);
        assert_eq!(filters.len(), 2);
    }
}
