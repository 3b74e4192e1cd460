use crate::application::ports::notifier::UpvoteNotifier;
use crate::domain::value_objects::UpvoteUpdate;
use crate::shared::AppError;
use async_trait::async_trait;
use serde::Serialize;
use tauri::{AppHandle, Emitter};

/// トグルの各フェーズを `upvote://update` イベントとしてフロントエンドへ流す
#[derive(Clone)]
pub struct IpcUpvoteNotifier {
    app_handle: AppHandle,
}

impl IpcUpvoteNotifier {
    pub fn new(app_handle: &AppHandle) -> Self {
        Self {
            app_handle: app_handle.clone(),
        }
    }
}

#[derive(Serialize, Clone)]
struct UpvoteEventPayload {
    post_id: String,
    update: UpvoteUpdate,
}

#[async_trait]
impl UpvoteNotifier for IpcUpvoteNotifier {
    async fn notify(&self, post_id: &str, update: &UpvoteUpdate) -> Result<(), AppError> {
        let payload = UpvoteEventPayload {
            post_id: post_id.to_string(),
            update: *update,
        };

        self.app_handle
            .emit("upvote://update", payload)
            .map_err(|err| AppError::Internal(format!("Failed to emit upvote event: {err}")))
    }
}
