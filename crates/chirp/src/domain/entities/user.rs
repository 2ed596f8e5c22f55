//! User - Registered account
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Tweet;

/// User - account identity plus both sides of its follow edges
///
/// `followers` and `following` keep insertion order and never hold the
/// same ID twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub followers: Vec<Uuid>,
    pub following: Vec<Uuid>,
    pub tweets: Vec<Tweet>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with generated ID and empty graph
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            followers: Vec::new(),
            following: Vec::new(),
            tweets: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_following(&self, user_id: Uuid) -> bool {
        self.following.contains(&user_id)
    }

    pub fn is_followed_by(&self, user_id: Uuid) -> bool {
        self.followers.contains(&user_id)
    }

    /// Record that this user follows `followed_id`. Returns false if the
    /// edge already existed.
    pub fn add_following(&mut self, followed_id: Uuid) -> bool {
        if self.is_following(followed_id) {
            return false;
        }
        self.following.push(followed_id);
        true
    }

    /// Record that `follower_id` follows this user. Returns false if the
    /// edge already existed.
    pub fn add_follower(&mut self, follower_id: Uuid) -> bool {
        if self.is_followed_by(follower_id) {
            return false;
        }
        self.followers.push(follower_id);
        true
    }
}
