//! Tweet Application Service (Use Case)

use std::sync::Arc;
use uuid::Uuid;

use chirp::{DomainError, NewTweet, Tweet, TweetMessage, TweetRepository};

/// Application service for Tweet operations
pub struct TweetService<R: TweetRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TweetRepository + ?Sized> TweetService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Post a tweet as `user_id`.
    ///
    /// The message is length-checked before the repository is called; ID
    /// assignment is left to the repository.
    pub async fn create_tweet(&self, user_id: Uuid, message: String) -> Result<Tweet, DomainError> {
        let message = TweetMessage::parse(message)?;
        let tweet = self
            .repo
            .create_tweet(NewTweet::new(user_id, message))
            .await?;

        tracing::info!("Created Tweet: {} by {}", tweet.id, tweet.user_id);

        Ok(tweet)
    }
}
