pub mod auth_service;
pub mod feed_service;
pub mod post_service;
pub mod saved_post_service;
pub mod upvote_service;

pub use auth_service::AuthService;
pub use feed_service::FeedService;
pub use post_service::PostService;
pub use saved_post_service::SavedPostService;
pub use upvote_service::UpvoteService;
