//! In-memory implementation of TweetRepository

use async_trait::async_trait;

use chirp::{DomainError, NewTweet, Tweet, TweetRepository};

use super::InMemoryStore;

/// In-memory implementation of TweetRepository
#[derive(Clone)]
pub struct InMemoryTweetRepository {
    store: InMemoryStore,
}

impl InMemoryTweetRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, DomainError> {
        let mut users = self.store.write().await;
        let author = users
            .get_mut(&tweet.user_id)
            .ok_or_else(|| DomainError::user_not_found(tweet.user_id))?;

        let tweet = tweet.into_tweet();
        author.tweets.push(tweet.clone());

        Ok(tweet)
    }
}
