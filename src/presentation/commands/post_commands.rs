use super::require_user;
use crate::{
    presentation::dto::{
        post_dto::{
            AddCommentRequest, CommentResponse, CreatePostRequest, DeletePostRequest,
            PostResponse, UpdatePostRequest,
        },
        ApiResponse,
    },
    state::AppState,
};
use tauri::State;

/// 投稿を作成する
#[tauri::command]
pub async fn create_post(
    state: State<'_, AppState>,
    request: CreatePostRequest,
) -> Result<ApiResponse<PostResponse>, String> {
    // 認証チェック
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.post_handler.create_post(request, &viewer).await,
    ))
}

/// 投稿を 1 件取得する
#[tauri::command]
pub async fn get_post(
    state: State<'_, AppState>,
    post_id: String,
) -> Result<ApiResponse<Option<PostResponse>>, String> {
    Ok(ApiResponse::from_result(
        state.post_handler.get_post(&post_id).await,
    ))
}

/// 自分の投稿一覧
#[tauri::command]
pub async fn get_my_posts(
    state: State<'_, AppState>,
) -> Result<ApiResponse<Vec<PostResponse>>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.post_handler.my_posts(&viewer).await,
    ))
}

/// 投稿を編集する（著者のみ）
#[tauri::command]
pub async fn update_post(
    state: State<'_, AppState>,
    request: UpdatePostRequest,
) -> Result<ApiResponse<()>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.post_handler.update_post(request, &viewer).await,
    ))
}

/// 投稿を削除する（著者のみ）
#[tauri::command]
pub async fn delete_post(
    state: State<'_, AppState>,
    request: DeletePostRequest,
) -> Result<ApiResponse<()>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.post_handler.delete_post(request, &viewer).await,
    ))
}

/// コメントを追加する
#[tauri::command]
pub async fn add_comment(
    state: State<'_, AppState>,
    request: AddCommentRequest,
) -> Result<ApiResponse<String>, String> {
    let viewer = match require_user(&state).await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state.post_handler.add_comment(request, &viewer).await,
    ))
}

/// 投稿のコメント一覧（古い順）
#[tauri::command]
pub async fn get_comments(
    state: State<'_, AppState>,
    post_id: String,
) -> Result<ApiResponse<Vec<CommentResponse>>, String> {
    Ok(ApiResponse::from_result(
        state.post_handler.comments_for_post(&post_id).await,
    ))
}

/// 全投稿からタグ一覧を集める
#[tauri::command]
pub async fn get_all_tags(
    state: State<'_, AppState>,
) -> Result<ApiResponse<Vec<String>>, String> {
    Ok(ApiResponse::from_result(state.post_handler.all_tags().await))
}
