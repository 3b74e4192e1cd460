use serde::{Deserialize, Serialize};

/// 認証プロバイダから得た現在のユーザー
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

impl User {
    pub fn new(id: String, display_name: String, email: String) -> Self {
        Self {
            id,
            display_name,
            email,
        }
    }
}
