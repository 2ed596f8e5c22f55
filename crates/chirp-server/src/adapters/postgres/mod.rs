//! PostgreSQL Repository Implementations

mod tweet_repository;
mod user_repository;

pub use tweet_repository::PgTweetRepository;
pub use user_repository::PgUserRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use chirp::DomainError;

/// Open a pool and bring the schema up to date
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("✅ Database migrations completed");

    Ok(pool)
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Storage(e.to_string())
}
