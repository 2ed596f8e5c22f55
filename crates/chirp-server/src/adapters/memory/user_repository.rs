//! In-memory implementation of UserRepository

use async_trait::async_trait;
use uuid::Uuid;

use chirp::{DomainError, Tweet, User, UserRepository};

use super::InMemoryStore;

/// In-memory implementation of UserRepository
#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    async fn with_user<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&User) -> T + Send,
    ) -> Result<T, DomainError> {
        let users = self.store.read().await;
        users
            .get(&id)
            .map(f)
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError> {
        let user = User::new(name.to_string(), email.to_string());
        self.store.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.with_user(id, User::clone).await
    }

    async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), DomainError> {
        let mut users = self.store.write().await;

        for id in [follower_id, followed_id] {
            if !users.contains_key(&id) {
                return Err(DomainError::user_not_found(id));
            }
        }

        // Both sides exist and the write guard is held for both updates
        if let Some(follower) = users.get_mut(&follower_id) {
            follower.add_following(followed_id);
        }
        if let Some(followed) = users.get_mut(&followed_id) {
            followed.add_follower(follower_id);
        }

        Ok(())
    }

    async fn get_followed_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        self.with_user(user_id, |user| user.following.clone()).await
    }

    async fn get_follower_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        self.with_user(user_id, |user| user.followers.clone()).await
    }

    async fn get_tweets_by_author(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError> {
        self.with_user(user_id, |user| user.tweets.clone()).await
    }
}
