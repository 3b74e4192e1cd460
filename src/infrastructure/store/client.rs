use crate::shared::error::AppError;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// マネージドドキュメントストアの REST クライアント。
/// ドキュメントは `{collection}/{id}`（サブコレクションは
/// `posts/{id}/comments` のようにパスを重ねる）で指す。
#[derive(Clone)]
pub struct DocStoreClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

/// ストアに投げる問い合わせ。
/// 配列和集合フィルタとストア側ソートは同時に使えない（ストアの制約）。
#[derive(Debug, Clone, Serialize)]
pub struct StoreQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<QueryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueryFilter {
    /// フィールド一致
    Eq { field: String, value: Value },
    /// 配列フィールドが値のいずれかを含む（和集合）
    ArrayContainsAny { field: String, values: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Asc,
    Desc,
}

impl OrderBy {
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: Direction::Desc,
        }
    }
}

impl DocStoreClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput("store base URL is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AppError::Internal(err.to_string()))?;
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|value| !value.trim().is_empty()),
            http,
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/v1/{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }
        builder
    }

    /// ドキュメントを 1 件取得。無ければ None。
    pub async fn get_document(&self, path: &str) -> Result<Option<Value>, AppError> {
        let resp = self.request(Method::GET, path).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = ensure_success(resp).await?;
        Ok(Some(resp.json::<Value>().await?))
    }

    /// ID 採番付きで作成し、採番された ID を返す
    pub async fn create_document(&self, collection: &str, body: &Value) -> Result<String, AppError> {
        let resp = self
            .request(Method::POST, collection)
            .json(body)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let created = resp.json::<Value>().await?;
        created
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::DeserializationError("store response is missing an id".to_string())
            })
    }

    /// ID 指定の upsert
    pub async fn set_document(&self, path: &str, body: &Value) -> Result<(), AppError> {
        let resp = self.request(Method::PUT, path).json(body).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// 部分更新。渡したフィールドだけをマージする。
    pub async fn patch_document(&self, path: &str, body: &Value) -> Result<(), AppError> {
        let resp = self.request(Method::PATCH, path).json(body).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// 削除。既に無い場合も成功扱い。
    pub async fn delete_document(&self, path: &str) -> Result<(), AppError> {
        let resp = self.request(Method::DELETE, path).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        ensure_success(resp).await?;
        Ok(())
    }

    /// 数値フィールドをサーバー側で増減させる
    pub async fn increment_field(&self, path: &str, field: &str, by: i64) -> Result<(), AppError> {
        let resp = self
            .request(Method::POST, &format!("{path}/increment"))
            .json(&serde_json::json!({ "field": field, "by": by }))
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// コレクションへの問い合わせ
    pub async fn query(&self, collection: &str, query: &StoreQuery) -> Result<Vec<Value>, AppError> {
        let resp = self
            .request(Method::POST, &format!("{collection}/query"))
            .json(query)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let body = resp.json::<Value>().await?;
        match body.get("documents") {
            Some(Value::Array(documents)) => Ok(documents.clone()),
            _ => Err(AppError::DeserializationError(
                "store query response is missing documents".to_string(),
            )),
        }
    }
}

async fn ensure_success(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(body));
    }
    Err(AppError::Store(format!("{status}: {body}")))
}
