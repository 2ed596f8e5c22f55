//! Tweet - Short message authored by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::TweetMessage;

/// Tweet - immutable once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A tweet that has passed validation but has not been stored yet.
///
/// Carries no ID: repositories assign one in `create_tweet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTweet {
    pub user_id: Uuid,
    pub message: TweetMessage,
}

impl NewTweet {
    pub fn new(user_id: Uuid, message: TweetMessage) -> Self {
        Self { user_id, message }
    }

    /// Materialize with a freshly generated ID and timestamp
    pub fn into_tweet(self) -> Tweet {
        Tweet {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            message: self.message.into_inner(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_tweet_assigns_id() {
        let author = Uuid::new_v4();
        let message = TweetMessage::parse("hello").unwrap();

        let first = NewTweet::new(author, message.clone()).into_tweet();
        let second = NewTweet::new(author, message).into_tweet();

        assert_eq!(first.user_id, author);
        assert_eq!(first.message, "hello");
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }
}
