//! In-Memory Repository Implementations
//!
//! Both repositories share one explicitly constructed [`InMemoryStore`].

mod store;
mod tweet_repository;
mod user_repository;

pub use store::InMemoryStore;
pub use tweet_repository::InMemoryTweetRepository;
pub use user_repository::InMemoryUserRepository;
