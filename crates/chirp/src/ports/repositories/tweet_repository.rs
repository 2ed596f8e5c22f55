//! Tweet Repository Port
//!
//! Abstract interface for Tweet persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, NewTweet, Tweet};

/// Repository interface for Tweet entities
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Store a tweet and append it to its author's tweets.
    ///
    /// Fails with `NotFound` when the author does not exist.
    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, DomainError>;
}
