pub mod client;
pub mod comments;
pub mod mapper;
pub mod posts;
pub mod saved_posts;
pub mod upvotes;

pub use client::DocStoreClient;
pub use comments::StoreCommentRepository;
pub use posts::StorePostRepository;
pub use saved_posts::StoreSavedPostRepository;
pub use upvotes::StoreUpvoteRepository;
