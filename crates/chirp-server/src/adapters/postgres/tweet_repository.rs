//! PostgreSQL implementation of TweetRepository

use async_trait::async_trait;
use sqlx::PgPool;

use chirp::{DomainError, NewTweet, Tweet, TweetRepository};

use super::storage_error;
use super::user_repository::TweetRow;

/// PostgreSQL implementation of TweetRepository
pub struct PgTweetRepository {
    pool: PgPool,
}

impl PgTweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TweetRepository for PgTweetRepository {
    async fn create_tweet(&self, tweet: NewTweet) -> Result<Tweet, DomainError> {
        let tweet = tweet.into_tweet();

        // The author's collection is the tweets table itself, so the single
        // insert is the whole append.
        let row = sqlx::query_as::<_, TweetRow>(
            r#"
            INSERT INTO tweets (id, user_id, message, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, message, created_at
            "#,
        )
        .bind(tweet.id)
        .bind(tweet.user_id)
        .bind(&tweet.message)
        .bind(tweet.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                DomainError::user_not_found(tweet.user_id)
            }
            e => storage_error(e),
        })?;

        Ok(row.into())
    }
}
