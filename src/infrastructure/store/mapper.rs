use crate::shared::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// ストアのドキュメント（"id" 入り JSON）をドメイン型へ
pub fn from_document<T: DeserializeOwned>(doc: Value) -> Result<T, AppError> {
    serde_json::from_value(doc).map_err(|err| AppError::DeserializationError(err.to_string()))
}

/// ドメイン型をドキュメントボディへ。ID 採番をストアに任せる場合は "id" を剥がす。
pub fn to_document<T: Serialize>(entity: &T, strip_id: bool) -> Result<Value, AppError> {
    let mut doc = serde_json::to_value(entity)
        .map_err(|err| AppError::SerializationError(err.to_string()))?;
    if strip_id {
        if let Some(map) = doc.as_object_mut() {
            map.remove("id");
        }
    }
    Ok(doc)
}
