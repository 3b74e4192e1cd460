use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub identity: IdentityConfig,
    pub cache: CacheConfig,
}

/// 外部ドキュメントストアへの接続設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// 一覧取得の上限（フィードはこの件数までしか読まない）
    pub fetch_cap: usize,
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub post_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                base_url: "https://store.lingora.app".to_string(),
                api_key: None,
                fetch_cap: 50,
                request_timeout: 30,
            },
            identity: IdentityConfig {
                base_url: "https://identity.lingora.app".to_string(),
                api_key: None,
            },
            cache: CacheConfig { post_capacity: 256 },
        }
    }
}

impl AppConfig {
    /// 設定ファイル（あれば）を読み、環境変数で上書きする
    pub fn load() -> Self {
        let mut cfg = Self::config_file_path()
            .and_then(|path| Self::read_from_file(&path))
            .unwrap_or_default();
        cfg.apply_env();
        cfg
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env();
        cfg
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lingora").join("config.json"))
    }

    fn read_from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                warn!("Ignoring malformed config at {}: {err}", path.display());
                None
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("LINGORA_STORE_URL") {
            if !v.trim().is_empty() {
                self.store.base_url = v.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(v) = std::env::var("LINGORA_STORE_API_KEY") {
            self.store.api_key = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Ok(v) = std::env::var("LINGORA_STORE_FETCH_CAP") {
            if let Some(value) = parse_usize(&v) {
                self.store.fetch_cap = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("LINGORA_STORE_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                self.store.request_timeout = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("LINGORA_IDENTITY_URL") {
            if !v.trim().is_empty() {
                self.identity.base_url = v.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(v) = std::env::var("LINGORA_IDENTITY_API_KEY") {
            self.identity.api_key = Some(v).filter(|s| !s.trim().is_empty());
        }
        if let Ok(v) = std::env::var("LINGORA_POST_CACHE_CAPACITY") {
            if let Some(value) = parse_usize(&v) {
                self.cache.post_capacity = value.max(1);
            }
        }
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}
