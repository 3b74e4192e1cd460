use crate::{
    presentation::dto::{
        feed_dto::{
            AddTagFilterRequest, FeedResponse, RemoveTagFilterRequest, SetSearchTermRequest,
            SetSortKeyRequest,
        },
        ApiResponse,
    },
    state::AppState,
};
use tauri::State;

/// 現在のタグフィルタでフィードを取り直す。失敗時は空のフィードと
/// リトライ可能なエラーが返る。
#[tauri::command]
pub async fn refresh_feed(
    state: State<'_, AppState>,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::from_result(state.feed_handler.refresh().await))
}

/// 検索語を変更する（再取得なし）
#[tauri::command]
pub async fn set_search_term(
    state: State<'_, AppState>,
    request: SetSearchTermRequest,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::success(
        state.feed_handler.set_search_term(request).await,
    ))
}

/// ソートキーを変更する（再取得なし）
#[tauri::command]
pub async fn set_sort_key(
    state: State<'_, AppState>,
    request: SetSortKeyRequest,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::success(
        state.feed_handler.set_sort_key(request).await,
    ))
}

/// タグフィルタを追加する（集合が変われば再取得）
#[tauri::command]
pub async fn add_tag_filter(
    state: State<'_, AppState>,
    request: AddTagFilterRequest,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::from_result(
        state.feed_handler.add_tag_filter(request).await,
    ))
}

/// タグフィルタを位置指定で外す
#[tauri::command]
pub async fn remove_tag_filter(
    state: State<'_, AppState>,
    request: RemoveTagFilterRequest,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::from_result(
        state.feed_handler.remove_tag_filter(request).await,
    ))
}

/// タグフィルタを全部外す
#[tauri::command]
pub async fn clear_tag_filters(
    state: State<'_, AppState>,
) -> Result<ApiResponse<FeedResponse>, String> {
    Ok(ApiResponse::from_result(
        state.feed_handler.clear_tag_filters().await,
    ))
}
