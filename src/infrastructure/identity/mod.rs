pub mod client;

pub use client::IdentityClient;
