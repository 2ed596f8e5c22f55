//! User Repository Port
//!
//! Abstract interface for user and follow-graph persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{aggregate_timeline, errors::DomainError, Tweet, User};

/// Repository interface for User entities and their follow edges
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with a freshly assigned ID and an empty graph
    async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError>;

    /// Fetch a fully materialized user (followers, following, tweets)
    async fn get_user(&self, id: Uuid) -> Result<User, DomainError>;

    /// Add the follower -> followed edge on both sides, or on neither.
    ///
    /// Following someone already followed succeeds without change.
    async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), DomainError>;

    /// IDs the user follows, in the order the follows happened
    async fn get_followed_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    /// IDs following the user, in the order the follows happened
    async fn get_follower_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    /// Tweets authored by the user, oldest first
    async fn get_tweets_by_author(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError>;

    /// Tweets of every followed user, concatenated in follow order
    async fn get_timeline(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError> {
        aggregate_timeline(self, user_id).await
    }
}
