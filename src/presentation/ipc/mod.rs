pub mod upvote_notifier;

pub use upvote_notifier::IpcUpvoteNotifier;
