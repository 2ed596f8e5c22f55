//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use chirp::{DomainError, Tweet, User, UserRepository};

use super::storage_error;

const SNAPSHOT_READ: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_exists<'e, E: PgExecutor<'e>>(
        executor: E,
        id: Uuid,
    ) -> Result<(), DomainError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(executor)
                .await
                .map_err(storage_error)?;

        if exists {
            Ok(())
        } else {
            Err(DomainError::user_not_found(id))
        }
    }

    async fn followed_ids<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT followed_id FROM follows WHERE follower_id = $1 ORDER BY seq",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(storage_error)
    }

    async fn follower_ids<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT follower_id FROM follows WHERE followed_id = $1 ORDER BY seq",
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(storage_error)
    }

    async fn tweets_of<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: Uuid,
    ) -> Result<Vec<Tweet>, DomainError> {
        let rows = sqlx::query_as::<_, TweetRow>(
            r#"
            SELECT id, user_id, message, created_at
            FROM tweets
            WHERE user_id = $1
            ORDER BY seq
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            followers: Vec::new(),
            following: Vec::new(),
            tweets: Vec::new(),
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct TweetRow {
    pub(super) id: Uuid,
    pub(super) user_id: Uuid,
    pub(super) message: String,
    pub(super) created_at: chrono::DateTime<chrono::Utc>,
}

impl From<TweetRow> for Tweet {
    fn from(row: TweetRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError> {
        let user = User::new(name.to_string(), email.to_string());

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.into())
    }

    async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        // One snapshot for the row, both edge lists and the tweets
        let mut tx = self.pool.begin().await.map_err(storage_error)?;
        sqlx::query(SNAPSHOT_READ)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| DomainError::user_not_found(id))?;

        let mut user: User = row.into();
        user.followers = Self::follower_ids(&mut *tx, id).await?;
        user.following = Self::followed_ids(&mut *tx, id).await?;
        user.tweets = Self::tweets_of(&mut *tx, id).await?;

        tx.commit().await.map_err(storage_error)?;

        Ok(user)
    }

    async fn follow(&self, follower_id: Uuid, followed_id: Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        Self::ensure_exists(&mut *tx, follower_id).await?;
        Self::ensure_exists(&mut *tx, followed_id).await?;

        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followed_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followed_id) DO NOTHING
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        Ok(())
    }

    async fn get_followed_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        Self::ensure_exists(&self.pool, user_id).await?;
        Self::followed_ids(&self.pool, user_id).await
    }

    async fn get_follower_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        Self::ensure_exists(&self.pool, user_id).await?;
        Self::follower_ids(&self.pool, user_id).await
    }

    async fn get_tweets_by_author(&self, user_id: Uuid) -> Result<Vec<Tweet>, DomainError> {
        Self::ensure_exists(&self.pool, user_id).await?;
        Self::tweets_of(&self.pool, user_id).await
    }
}
