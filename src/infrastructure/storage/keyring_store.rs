use crate::application::ports::identity::AuthSession;
use crate::application::ports::session_store::SessionStore;
use crate::shared::error::AppError;
use async_trait::async_trait;

const SERVICE_NAME: &str = "lingora";
const SESSION_ACCOUNT: &str = "session";

/// OS のキーチェーンにセッション JSON を置く SessionStore 実装
pub struct KeyringSessionStore;

impl KeyringSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<keyring::Entry, AppError> {
        Ok(keyring::Entry::new(SERVICE_NAME, SESSION_ACCOUNT)?)
    }
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for KeyringSessionStore {
    async fn store(&self, session: &AuthSession) -> Result<(), AppError> {
        let payload = serde_json::to_string(session)
            .map_err(|err| AppError::SerializationError(err.to_string()))?;
        Self::entry()?.set_password(&payload)?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<AuthSession>, AppError> {
        match Self::entry()?.get_password() {
            Ok(payload) => {
                let session = serde_json::from_str(&payload)
                    .map_err(|err| AppError::DeserializationError(err.to_string()))?;
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn clear(&self) -> Result<(), AppError> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
