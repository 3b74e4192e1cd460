use crate::{
    presentation::dto::{
        upvote_dto::{
            ToggleUpvoteRequest, UpvoteUpdateResponse, UpvoteViewRequest, UpvoteViewResponse,
        },
        ApiResponse,
    },
    state::AppState,
};
use tauri::State;

/// アップボートをトグルする。未ログインはサービス側で弾かれる。
/// 楽観値は `upvote://update` イベントで先行して届き、
/// ここからは終端状態（reconciled / rolled_back）だけが返る。
#[tauri::command]
pub async fn toggle_upvote(
    state: State<'_, AppState>,
    request: ToggleUpvoteRequest,
) -> Result<ApiResponse<UpvoteUpdateResponse>, String> {
    let viewer = match state.auth_service.current_user().await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state
            .upvote_handler
            .toggle_upvote(request, viewer.as_ref())
            .await,
    ))
}

/// マウント時の (has_upvoted, count)
#[tauri::command]
pub async fn get_upvote_view(
    state: State<'_, AppState>,
    request: UpvoteViewRequest,
) -> Result<ApiResponse<UpvoteViewResponse>, String> {
    let viewer = match state.auth_service.current_user().await {
        Ok(user) => user,
        Err(err) => return Ok(ApiResponse::from_app_error(err)),
    };

    Ok(ApiResponse::from_result(
        state
            .upvote_handler
            .upvote_view(request, viewer.as_ref())
            .await,
    ))
}
