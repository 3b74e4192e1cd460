use crate::{
    application::services::AuthService,
    presentation::dto::{
        auth_dto::{
            AuthStatusResponse, FederatedLoginRequest, LoginRequest, SignupRequest, UserResponse,
        },
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct AuthHandler {
    auth_service: Arc<AuthService>,
}

impl AuthHandler {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<UserResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let user = self
            .auth_service
            .login(&request.email, &request.password)
            .await?;
        Ok(UserResponse::from(user))
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<UserResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let user = self
            .auth_service
            .signup(&request.email, &request.password, &request.display_name)
            .await?;
        Ok(UserResponse::from(user))
    }

    pub async fn login_with_provider(
        &self,
        request: FederatedLoginRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let user = self
            .auth_service
            .login_with_provider(&request.provider, &request.token)
            .await?;
        Ok(UserResponse::from(user))
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth_service.logout().await
    }

    pub async fn auth_status(&self) -> Result<AuthStatusResponse, AppError> {
        let status = self.auth_service.auth_status().await?;
        Ok(AuthStatusResponse::from(status))
    }
}
