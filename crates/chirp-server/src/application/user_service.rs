//! User Application Service (Use Case)
//!
//! Orchestrates registration, lookup, follow edges and timelines.

use std::sync::Arc;
use uuid::Uuid;

use chirp::{DomainError, Tweet, User, UserRepository};

/// Application service for User operations
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    allow_self_follow: bool,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            allow_self_follow: true,
        }
    }

    /// Whether a user may follow themselves
    pub fn with_self_follow(mut self, allow: bool) -> Self {
        self.allow_self_follow = allow;
        self
    }

    /// Register a new user
    pub async fn create_user(&self, name: String, email: String) -> Result<User, DomainError> {
        let user = self.repo.create_user(&name, &email).await?;

        tracing::info!("Created User: {} ({})", user.name, user.id);

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo.get_user(id).await
    }

    /// Make `user_id` follow `followed_id`
    pub async fn follow_user(&self, user_id: Uuid, followed_id: Uuid) -> Result<(), DomainError> {
        if user_id == followed_id && !self.allow_self_follow {
            // unknown IDs report NotFound under either policy
            self.repo.get_user(user_id).await?;
            return Err(DomainError::Validation(
                "Users cannot follow themselves".to_string(),
            ));
        }

        self.repo.follow(user_id, followed_id).await?;

        tracing::info!(
            follower_id = %user_id,
            followed_id = %followed_id,
            "User followed"
        );

        Ok(())
    }

    /// Tweets from every account the user follows
    pub async fn get_user_timeline(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError> {
        self.repo.get_timeline(user_id).await
    }

    pub async fn get_followers(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        self.repo.get_follower_ids(user_id).await
    }

    pub async fn get_following(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        self.repo.get_followed_ids(user_id).await
    }
}
