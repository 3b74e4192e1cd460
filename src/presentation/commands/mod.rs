pub mod auth_commands;
pub mod feed_commands;
pub mod post_commands;
pub mod saved_post_commands;
pub mod upvote_commands;

use crate::domain::entities::User;
use crate::shared::error::AppError;
use crate::state::AppState;

/// 認証必須の操作に渡す identity をセッションから取り出す
pub(crate) async fn require_user(state: &AppState) -> Result<User, AppError> {
    state
        .auth_service
        .current_user()
        .await?
        .ok_or_else(|| AppError::Unauthenticated("login required".to_string()))
}
