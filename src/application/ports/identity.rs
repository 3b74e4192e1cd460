use crate::domain::entities::User;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// プロバイダ発行のセッション。OS キーチェーンにそのまま永続化される。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
}

/// 認証プロバイダが返すエラーの分類。
/// UI はこの分類ごとに文言を出し分ける。
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no account found for this email")]
    UserNotFound,
    #[error("incorrect password")]
    WrongPassword,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("account disabled")]
    UserDisabled,
    #[error("too many failed attempts")]
    TooManyAttempts,
    #[error("email already in use")]
    EmailInUse,
    #[error("password too weak")]
    WeakPassword,
    #[error("sign-in cancelled")]
    Cancelled,
    #[error("provider error: {0}")]
    Provider(String),
    #[error("network error: {0}")]
    Network(String),
}

impl CredentialError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CredentialError::UserNotFound => "No account found with this email",
            CredentialError::WrongPassword => "Incorrect password",
            CredentialError::InvalidEmail => "Please enter a valid email address",
            CredentialError::UserDisabled => "This account has been disabled",
            CredentialError::TooManyAttempts => {
                "Too many failed attempts. Please try again later"
            }
            CredentialError::EmailInUse => "An account already exists with this email",
            CredentialError::WeakPassword => "Password should be at least 6 characters",
            CredentialError::Cancelled => "Sign-in cancelled",
            CredentialError::Provider(_) => "Failed to sign in",
            CredentialError::Network(_) => "Network error. Please try again.",
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::Network(msg) => AppError::Network(msg),
            other => AppError::Auth(other.user_message().to_string()),
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CredentialError>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthSession, CredentialError>;
    /// 連合プロバイダでのサインイン。同意フローは UI 側で済ませ、
    /// ここには取得済みのプロバイダトークンが渡ってくる。
    async fn sign_in_with_provider(
        &self,
        provider: &str,
        provider_token: &str,
    ) -> Result<AuthSession, CredentialError>;
}
