use crate::domain::value_objects::UpvoteUpdate;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// トグルの各フェーズを表示レイヤーへ押し出すポート。
/// Optimistic は最初のリモート呼び出しより前に届く。
#[async_trait]
pub trait UpvoteNotifier: Send + Sync {
    async fn notify(&self, post_id: &str, update: &UpvoteUpdate) -> Result<(), AppError>;
}
