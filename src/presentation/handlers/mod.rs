pub mod auth_handler;
pub mod feed_handler;
pub mod post_handler;
pub mod saved_post_handler;
pub mod upvote_handler;

pub use auth_handler::AuthHandler;
pub use feed_handler::FeedHandler;
pub use post_handler::PostHandler;
pub use saved_post_handler::SavedPostHandler;
pub use upvote_handler::UpvoteHandler;
