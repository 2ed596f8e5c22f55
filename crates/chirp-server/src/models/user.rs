//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use chirp::User;

/// Create User request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Public user summary, embedded in tweets (no email)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
}

/// Full user view with graph sizes instead of raw lists
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub followers_count: usize,
    pub following_count: usize,
    pub tweets_count: usize,
    pub created_at: DateTime<Utc>,
}

/// IDs on one side of a user's follow edges
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FollowListResponse {
    pub user_id: Uuid,
    pub ids: Vec<Uuid>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

impl From<User> for UserDetailResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            followers_count: user.followers.len(),
            following_count: user.following.len(),
            tweets_count: user.tweets.len(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
