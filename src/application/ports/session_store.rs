use super::identity::AuthSession;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// ログインセッションの永続化先
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn store(&self, session: &AuthSession) -> Result<(), AppError>;
    async fn load(&self) -> Result<Option<AuthSession>, AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}
