use crate::{
    presentation::dto::{
        auth_dto::{
            AuthStatusResponse, FederatedLoginRequest, LoginRequest, SignupRequest, UserResponse,
        },
        ApiResponse,
    },
    state::AppState,
};
use tauri::State;

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    request: LoginRequest,
) -> Result<ApiResponse<UserResponse>, String> {
    Ok(ApiResponse::from_result(
        state.auth_handler.login(request).await,
    ))
}

#[tauri::command]
pub async fn signup(
    state: State<'_, AppState>,
    request: SignupRequest,
) -> Result<ApiResponse<UserResponse>, String> {
    Ok(ApiResponse::from_result(
        state.auth_handler.signup(request).await,
    ))
}

/// 連合プロバイダでログインする。同意画面はフロントエンドが開く。
#[tauri::command]
pub async fn login_with_provider(
    state: State<'_, AppState>,
    request: FederatedLoginRequest,
) -> Result<ApiResponse<UserResponse>, String> {
    Ok(ApiResponse::from_result(
        state.auth_handler.login_with_provider(request).await,
    ))
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<ApiResponse<()>, String> {
    Ok(ApiResponse::from_result(state.auth_handler.logout().await))
}

#[tauri::command]
pub async fn get_auth_status(
    state: State<'_, AppState>,
) -> Result<ApiResponse<AuthStatusResponse>, String> {
    Ok(ApiResponse::from_result(
        state.auth_handler.auth_status().await,
    ))
}
