use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Unauthenticated(String),
    Unauthorized(String),
    NotFound(String),
    Network(String),
    Store(String),
    Auth(String),
    Storage(String),
    InvalidInput(String),
    SerializationError(String),
    DeserializationError(String),
    Internal(String),
}

impl AppError {
    /// フロントエンドに返すエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "unauthenticated",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::Network(_) => "network",
            AppError::Store(_) => "store",
            AppError::Auth(_) => "auth",
            AppError::Storage(_) => "storage",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::SerializationError(_) => "serialization",
            AppError::DeserializationError(_) => "deserialization",
            AppError::Internal(_) => "internal",
        }
    }

    /// ユーザー向けメッセージ。復旧可能なエラーはリトライを促す文言にする。
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthenticated(_) => "Please log in to continue".to_string(),
            AppError::Unauthorized(_) => "You are not allowed to modify this content".to_string(),
            AppError::NotFound(_) => "This content is no longer available".to_string(),
            AppError::Network(_) | AppError::Store(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            AppError::Auth(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// 表示状態を壊さずに再試行できるエラーかどうか
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Store(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Store(msg) => write!(f, "Store error: {}", msg),
            AppError::Auth(msg) => write!(f, "Auth error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AppError::Network(err.to_string())
        } else {
            AppError::Store(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<keyring::Error> for AppError {
    fn from(err: keyring::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
