use crate::application::ports::identity::{AuthSession, CredentialError, IdentityProvider};
use crate::domain::entities::User;
use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// マネージド認証プロバイダの REST クライアント
#[derive(Clone)]
pub struct IdentityClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: UserResponse,
    id_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    display_name: String,
    email: String,
}

impl From<SessionResponse> for AuthSession {
    fn from(resp: SessionResponse) -> Self {
        AuthSession {
            user: User::new(resp.user.id, resp.user.display_name, resp.user.email),
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        }
    }
}

impl IdentityClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, CredentialError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Provider(
                "identity base URL is empty".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| CredentialError::Provider(err.to_string()))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|value| !value.trim().is_empty()),
            http,
        })
    }

    async fn post_session(&self, path: &str, body: Value) -> Result<AuthSession, CredentialError> {
        let url = format!("{}/v1/{}", self.base_url, path);
        let mut builder = self.http.request(Method::POST, url).json(&body);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }
        let resp = builder
            .send()
            .await
            .map_err(|err| CredentialError::Network(err.to_string()))?;

        if resp.status().is_success() {
            let session = resp
                .json::<SessionResponse>()
                .await
                .map_err(|err| CredentialError::Provider(err.to_string()))?;
            return Ok(session.into());
        }
        Err(classify_failure(resp).await)
    }
}

/// プロバイダのエラーコードを分類する。未知のコードは Provider にまとめる。
fn classify_code(code: &str) -> CredentialError {
    match code {
        "USER_NOT_FOUND" => CredentialError::UserNotFound,
        "WRONG_PASSWORD" | "INVALID_PASSWORD" => CredentialError::WrongPassword,
        "INVALID_EMAIL" => CredentialError::InvalidEmail,
        "USER_DISABLED" => CredentialError::UserDisabled,
        "TOO_MANY_ATTEMPTS" => CredentialError::TooManyAttempts,
        "EMAIL_IN_USE" | "EMAIL_EXISTS" => CredentialError::EmailInUse,
        "WEAK_PASSWORD" => CredentialError::WeakPassword,
        "CANCELLED" => CredentialError::Cancelled,
        other => CredentialError::Provider(other.to_string()),
    }
}

async fn classify_failure(resp: Response) -> CredentialError {
    let body = resp.json::<Value>().await.unwrap_or(Value::Null);
    let code = body
        .get("error")
        .and_then(|error| error.get("code"))
        .and_then(Value::as_str)
        .unwrap_or("");
    if code.is_empty() {
        CredentialError::Provider("unclassified provider error".to_string())
    } else {
        classify_code(code)
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CredentialError> {
        self.post_session(
            "sessions",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AuthSession, CredentialError> {
        self.post_session(
            "accounts",
            json!({
                "email": email,
                "password": password,
                "display_name": display_name,
            }),
        )
        .await
    }

    async fn sign_in_with_provider(
        &self,
        provider: &str,
        provider_token: &str,
    ) -> Result<AuthSession, CredentialError> {
        self.post_session(
            "sessions/federated",
            json!({ "provider": provider, "token": provider_token }),
        )
        .await
    }
}
