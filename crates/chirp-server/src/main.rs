use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{
    InMemoryStore, InMemoryTweetRepository, InMemoryUserRepository, PgTweetRepository,
    PgUserRepository,
};
use application::{TweetService, UserService};
use chirp::{TweetRepository, UserRepository};
use config::ServerConfig;

/// Application services bound to whichever backend was selected at startup
pub type AppUserService = UserService<dyn UserRepository>;
pub type AppTweetService = TweetService<dyn TweetRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub tweet_service: Arc<AppTweetService>,
    pub backend: &'static str,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        allow_self_follow: bool,
        backend: &'static str,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users).with_self_follow(allow_self_follow)),
            tweet_service: Arc::new(TweetService::new(tweets)),
            backend,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::tweets::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let state = match &config.database_url {
        Some(url) => {
            let pool = adapters::postgres::connect(url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("🐘 Using PostgreSQL backend");

            AppState::new(
                Arc::new(PgUserRepository::new(pool.clone())),
                Arc::new(PgTweetRepository::new(pool)),
                config.allow_self_follow,
                "postgres",
            )
        }
        None => {
            tracing::warn!("⚠️  DATABASE_URL not set, using in-memory database");
            let store = InMemoryStore::new();

            AppState::new(
                Arc::new(InMemoryUserRepository::new(store.clone())),
                Arc::new(InMemoryTweetRepository::new(store)),
                config.allow_self_follow,
                "memory",
            )
        }
    };

    Ok(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chirp_server=info,chirp=info,tower_http=info")),
        )
        .init();

    tracing::info!("🐦 Chirp API initializing...");

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    if !config.allow_self_follow {
        tracing::info!("Self-follow disabled");
    }

    let state = build_state(&config).await?;
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Chirp API listening on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
