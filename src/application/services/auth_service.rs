use crate::application::ports::identity::IdentityProvider;
use crate::application::ports::session_store::SessionStore;
use crate::domain::entities::User;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
}

/// 認証プロバイダとセッション永続化を束ねるサービス。
/// コア操作に渡す identity はすべてここから取り出す。
pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityProvider>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { identity, sessions }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "email and password are required".to_string(),
            ));
        }

        let session = self.identity.sign_in(email, password).await?;
        self.sessions.store(&session).await?;
        info!("User logged in: {}", session.user.id);
        Ok(session.user)
    }

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, AppError> {
        let email = email.trim();
        let display_name = display_name.trim();
        if email.is_empty() || password.is_empty() || display_name.is_empty() {
            return Err(AppError::InvalidInput(
                "email, password and display name are required".to_string(),
            ));
        }

        let session = self.identity.sign_up(email, password, display_name).await?;
        self.sessions.store(&session).await?;
        info!("User signed up: {}", session.user.id);
        Ok(session.user)
    }

    /// 連合プロバイダでのログイン。同意画面はフロントエンドが開き、
    /// 得られたトークンだけがここへ来る。
    pub async fn login_with_provider(
        &self,
        provider: &str,
        provider_token: &str,
    ) -> Result<User, AppError> {
        let session = self
            .identity
            .sign_in_with_provider(provider, provider_token)
            .await?;
        self.sessions.store(&session).await?;
        Ok(session.user)
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.sessions.clear().await
    }

    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        Ok(self.sessions.load().await?.map(|session| session.user))
    }

    pub async fn auth_status(&self) -> Result<AuthStatus, AppError> {
        let current_user = self.current_user().await?;
        Ok(AuthStatus {
            is_authenticated: current_user.is_some(),
            current_user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::identity::{AuthSession, CredentialError};
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};

    mock! {
        pub Identity {}

        #[async_trait]
        impl IdentityProvider for Identity {
            async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CredentialError>;
            async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<AuthSession, CredentialError>;
            async fn sign_in_with_provider(&self, provider: &str, provider_token: &str) -> Result<AuthSession, CredentialError>;
        }
    }

    mock! {
        pub Sessions {}

        #[async_trait]
        impl SessionStore for Sessions {
            async fn store(&self, session: &AuthSession) -> Result<(), AppError>;
            async fn load(&self) -> Result<Option<AuthSession>, AppError>;
            async fn clear(&self) -> Result<(), AppError>;
        }
    }

    fn sample_session() -> AuthSession {
        AuthSession {
            user: User::new("u1".into(), "Mika".into(), "mika@example.com".into()),
            id_token: "id-token".into(),
            refresh_token: "refresh-token".into(),
        }
    }

    #[tokio::test]
    async fn login_persists_the_session() {
        let mut identity = MockIdentity::new();
        identity
            .expect_sign_in()
            .with(eq("mika@example.com"), eq("hunter2"))
            .times(1)
            .returning(|_, _| Ok(sample_session()));
        let mut sessions = MockSessions::new();
        sessions.expect_store().times(1).returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(identity), Arc::new(sessions));
        let user = service
            .login("mika@example.com", "hunter2")
            .await
            .expect("login");
        assert_eq!(user.id, "u1");
    }

    #[tokio::test]
    async fn wrong_password_maps_to_auth_error() {
        let mut identity = MockIdentity::new();
        identity
            .expect_sign_in()
            .times(1)
            .returning(|_, _| Err(CredentialError::WrongPassword));
        let mut sessions = MockSessions::new();
        sessions.expect_store().times(0);

        let service = AuthService::new(Arc::new(identity), Arc::new(sessions));
        let err = service
            .login("mika@example.com", "wrong")
            .await
            .expect_err("should fail");
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[tokio::test]
    async fn current_user_is_none_without_a_session() {
        let identity = MockIdentity::new();
        let mut sessions = MockSessions::new();
        sessions.expect_load().times(1).returning(|| Ok(None));

        let service = AuthService::new(Arc::new(identity), Arc::new(sessions));
        assert!(service.current_user().await.expect("load").is_none());
    }

    #[tokio::test]
    async fn blank_signup_fields_are_rejected() {
        let service = AuthService::new(
            Arc::new(MockIdentity::new()),
            Arc::new(MockSessions::new()),
        );
        let result = service.signup("mika@example.com", "pw", "   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
