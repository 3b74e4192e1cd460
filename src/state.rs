use crate::application::ports::cache::PostCache;
use crate::application::ports::identity::IdentityProvider;
use crate::application::ports::notifier::UpvoteNotifier;
use crate::application::ports::repositories::{
    CommentRepository, PostRepository, SavedPostRepository, UpvoteRepository,
};
use crate::application::ports::session_store::SessionStore;
use crate::application::services::{
    AuthService, FeedService, PostService, SavedPostService, UpvoteService,
};
use crate::infrastructure::cache::LruPostCache;
use crate::infrastructure::identity::IdentityClient;
use crate::infrastructure::storage::KeyringSessionStore;
use crate::infrastructure::store::{
    DocStoreClient, StoreCommentRepository, StorePostRepository, StoreSavedPostRepository,
    StoreUpvoteRepository,
};
use crate::presentation::handlers::{
    AuthHandler, FeedHandler, PostHandler, SavedPostHandler, UpvoteHandler,
};
use crate::presentation::ipc::IpcUpvoteNotifier;
use crate::shared::{AppConfig, AppError};
use std::sync::Arc;
use std::time::Duration;

/// アプリケーション全体の状態を管理する構造体
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub auth_handler: Arc<AuthHandler>,
    pub post_handler: Arc<PostHandler>,
    pub feed_handler: Arc<FeedHandler>,
    pub saved_post_handler: Arc<SavedPostHandler>,
    pub upvote_handler: Arc<UpvoteHandler>,
}

impl AppState {
    pub fn new(app_handle: &tauri::AppHandle) -> Result<Self, AppError> {
        let config = AppConfig::load();

        // 外部コラボレータのクライアント
        let store_client = Arc::new(DocStoreClient::new(
            config.store.base_url.clone(),
            config.store.api_key.clone(),
            Duration::from_secs(config.store.request_timeout),
        )?);
        let identity_client: Arc<dyn IdentityProvider> = Arc::new(IdentityClient::new(
            config.identity.base_url.clone(),
            config.identity.api_key.clone(),
        )?);
        let session_store: Arc<dyn SessionStore> = Arc::new(KeyringSessionStore::new());

        // リポジトリ
        let post_repo: Arc<dyn PostRepository> =
            Arc::new(StorePostRepository::new(store_client.clone()));
        let comment_repo: Arc<dyn CommentRepository> =
            Arc::new(StoreCommentRepository::new(store_client.clone()));
        let upvote_repo: Arc<dyn UpvoteRepository> =
            Arc::new(StoreUpvoteRepository::new(store_client.clone()));
        let saved_repo: Arc<dyn SavedPostRepository> =
            Arc::new(StoreSavedPostRepository::new(store_client));

        let cache: Arc<dyn PostCache> = Arc::new(LruPostCache::new(config.cache.post_capacity));
        let notifier: Arc<dyn UpvoteNotifier> = Arc::new(IpcUpvoteNotifier::new(app_handle));

        // サービス
        let auth_service = Arc::new(AuthService::new(identity_client, session_store));
        let post_service = Arc::new(PostService::new(
            post_repo.clone(),
            comment_repo,
            cache,
            config.store.fetch_cap,
        ));
        let feed_service = Arc::new(FeedService::new(post_repo.clone(), config.store.fetch_cap));
        let saved_post_service = Arc::new(SavedPostService::new(saved_repo, post_repo));
        let upvote_service = Arc::new(UpvoteService::new(upvote_repo, notifier));

        Ok(Self {
            auth_service: auth_service.clone(),
            auth_handler: Arc::new(AuthHandler::new(auth_service)),
            post_handler: Arc::new(PostHandler::new(post_service)),
            feed_handler: Arc::new(FeedHandler::new(feed_service)),
            saved_post_handler: Arc::new(SavedPostHandler::new(saved_post_service)),
            upvote_handler: Arc::new(UpvoteHandler::new(upvote_service)),
        })
    }
}
