pub mod tag;
pub mod upvote;

pub use tag::{normalize_tag, TagFilterSet};
pub use upvote::{UpvoteUpdate, UpvoteView};
