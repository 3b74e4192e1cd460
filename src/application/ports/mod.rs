pub mod cache;
pub mod identity;
pub mod notifier;
pub mod repositories;
pub mod session_store;
