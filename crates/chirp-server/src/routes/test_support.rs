//! Router test helpers

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::adapters::{InMemoryStore, InMemoryTweetRepository, InMemoryUserRepository};
use crate::{build_router, AppState};

/// Full router over a fresh in-memory store
pub fn test_app(allow_self_follow: bool) -> Router {
    let store = InMemoryStore::new();
    let state = AppState::new(
        Arc::new(InMemoryUserRepository::new(store.clone())),
        Arc::new(InMemoryTweetRepository::new(store)),
        allow_self_follow,
        "memory",
    );
    build_router(state)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
