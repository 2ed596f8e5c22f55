//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories. Holds no entity state between calls.

mod tweet_service;
mod user_service;

pub use tweet_service::TweetService;
pub use user_service::UserService;
