use super::Validate;
use crate::domain::value_objects::{UpvoteUpdate, UpvoteView};
use serde::{Deserialize, Serialize};

/// トグル要求。表示中の状態をそのまま持ってくる。
#[derive(Debug, Deserialize)]
pub struct ToggleUpvoteRequest {
    pub post_id: String,
    pub has_upvoted: bool,
    pub count: u32,
}

impl Validate for ToggleUpvoteRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        Ok(())
    }
}

impl ToggleUpvoteRequest {
    pub fn view(&self) -> UpvoteView {
        UpvoteView::new(self.has_upvoted, self.count)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpvoteViewRequest {
    pub post_id: String,
}

impl Validate for UpvoteViewRequest {
    fn validate(&self) -> Result<(), String> {
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UpvoteViewResponse {
    pub has_upvoted: bool,
    pub count: u32,
}

impl From<UpvoteView> for UpvoteViewResponse {
    fn from(view: UpvoteView) -> Self {
        Self {
            has_upvoted: view.has_upvoted,
            count: view.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpvoteUpdateResponse {
    pub phase: &'static str,
    pub has_upvoted: bool,
    pub count: u32,
}

impl From<UpvoteUpdate> for UpvoteUpdateResponse {
    fn from(update: UpvoteUpdate) -> Self {
        let view = update.view();
        let phase = match update {
            UpvoteUpdate::Optimistic(_) => "optimistic",
            UpvoteUpdate::Reconciled(_) => "reconciled",
            UpvoteUpdate::RolledBack(_) => "rolled_back",
        };
        Self {
            phase,
            has_upvoted: view.has_upvoted,
            count: view.count,
        }
    }
}
