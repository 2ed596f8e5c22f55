//! Tweet DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use chirp::{Tweet, User};

use super::UserResponse;

/// Create Tweet request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTweetRequest {
    /// At most 280 characters
    pub message: String,
}

/// Tweet response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TweetResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Author summary, present when the author was loaded alongside
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl TweetResponse {
    pub fn with_author(tweet: Tweet, author: &User) -> Self {
        Self {
            user: Some(author.into()),
            ..Self::from(tweet)
        }
    }
}

impl From<Tweet> for TweetResponse {
    fn from(tweet: Tweet) -> Self {
        Self {
            id: tweet.id,
            user_id: tweet.user_id,
            message: tweet.message,
            created_at: tweet.created_at,
            user: None,
        }
    }
}
