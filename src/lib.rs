use tauri::Manager;
use tracing::info;

// モジュール定義
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

use presentation::commands::auth_commands;
use presentation::commands::feed_commands;
use presentation::commands::post_commands;
use presentation::commands::saved_post_commands;
use presentation::commands::upvote_commands;
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Run the Tauri application
///
/// # Panics
///
/// Panics if the Tauri application fails to run
pub fn run() {
    // ログ設定の初期化
    init_logging();

    info!("Lingora application starting...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            // 認証関連コマンド
            auth_commands::login,
            auth_commands::signup,
            auth_commands::login_with_provider,
            auth_commands::logout,
            auth_commands::get_auth_status,
            // 投稿関連コマンド
            post_commands::create_post,
            post_commands::get_post,
            post_commands::get_my_posts,
            post_commands::update_post,
            post_commands::delete_post,
            post_commands::add_comment,
            post_commands::get_comments,
            post_commands::get_all_tags,
            // フィード関連コマンド
            feed_commands::refresh_feed,
            feed_commands::set_search_term,
            feed_commands::set_sort_key,
            feed_commands::add_tag_filter,
            feed_commands::remove_tag_filter,
            feed_commands::clear_tag_filters,
            // アップボート関連コマンド
            upvote_commands::toggle_upvote,
            upvote_commands::get_upvote_view,
            // 保存済み投稿関連コマンド
            saved_post_commands::save_post,
            saved_post_commands::unsave_post,
            saved_post_commands::is_post_saved,
            saved_post_commands::get_saved_posts,
        ])
        .setup(|app| {
            // アプリケーション初期化処理
            let app_handle = app.handle();
            let app_state = AppState::new(app_handle)?;
            app_handle.manage(app_state);

            info!("Application setup complete");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingora=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
