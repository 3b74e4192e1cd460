use super::Validate;
use crate::application::services::auth_service::AuthStatus;
use crate::domain::entities::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email and password are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty()
            || self.password.is_empty()
            || self.display_name.trim().is_empty()
        {
            return Err("Email, password and display name are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct FederatedLoginRequest {
    pub provider: String,
    pub token: String,
}

impl Validate for FederatedLoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.provider.trim().is_empty() || self.token.trim().is_empty() {
            return Err("Provider and token are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub is_authenticated: bool,
    pub user: Option<UserResponse>,
}

impl From<AuthStatus> for AuthStatusResponse {
    fn from(status: AuthStatus) -> Self {
        Self {
            is_authenticated: status.is_authenticated,
            user: status.current_user.map(UserResponse::from),
        }
    }
}
