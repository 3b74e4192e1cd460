use super::require_user;
use crate::{
    presentation::dto::{
        saved_post_dto::{SavePostRequest, SavedPostEntryResponse, UnsavePostRequest},
        ApiResponse,
    },
    state::AppState,
};
use tauri::State;

/// 投稿をダッシュボードに保存する
#[tauri::command]
pub async fn save_post(
    state: State<'_, AppState>,
    request: SavePostRequest,
) -> Result<ApiResponse<()>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.saved_post_handler.save_post(request, &viewer).await,
    ))
}

/// 保存を解除する
#[tauri::command]
pub async fn unsave_post(
    state: State<'_, AppState>,
    request: UnsavePostRequest,
) -> Result<ApiResponse<()>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.saved_post_handler.unsave_post(request, &viewer).await,
    ))
}

/// 保存済みかどうか
#[tauri::command]
pub async fn is_post_saved(
    state: State<'_, AppState>,
    post_id: String,
) -> Result<ApiResponse<bool>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.saved_post_handler.is_saved(&post_id, &viewer).await,
    ))
}

/// 保存済み投稿のダッシュボード。消えた投稿は黙って落ちる。
#[tauri::command]
pub async fn get_saved_posts(
    state: State<'_, AppState>,
) -> Result<ApiResponse<Vec<SavedPostEntryResponse>>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.saved_post_handler.dashboard(&viewer).await,
    ))
}
