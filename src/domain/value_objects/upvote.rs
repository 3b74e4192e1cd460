use serde::{Deserialize, Serialize};

/// ある投稿に対する閲覧者の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvoteView {
    pub has_upvoted: bool,
    pub count: u32,
}

impl UpvoteView {
    pub fn new(has_upvoted: bool, count: u32) -> Self {
        Self { has_upvoted, count }
    }
}

/// トグル 1 回のライフサイクル。必ず Optimistic が先行し、
/// Reconciled か RolledBack のどちらか一方で終端する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "view", rename_all = "snake_case")]
pub enum UpvoteUpdate {
    /// リモート確定前にそのまま表示してよい楽観値
    Optimistic(UpvoteView),
    /// 変異後の authoritative read で確定した値
    Reconciled(UpvoteView),
    /// 失敗時にトグル前へ巻き戻した値
    RolledBack(UpvoteView),
}

impl UpvoteUpdate {
    pub fn view(&self) -> UpvoteView {
        match self {
            UpvoteUpdate::Optimistic(view)
            | UpvoteUpdate::Reconciled(view)
            | UpvoteUpdate::RolledBack(view) => *view,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, UpvoteUpdate::Optimistic(_))
    }
}
