//! Tweet Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use super::error::ApiResult;
use super::users::parse_user_id;
use crate::models::{CreateTweetRequest, ErrorResponse, SuccessResponse, TweetResponse};
use crate::AppState;

/// Post a tweet as the given user
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/tweet",
    params(("id" = Uuid, Path, description = "Author ID")),
    request_body = CreateTweetRequest,
    responses(
        (status = 201, description = "Tweet created; data is a TweetResponse with author", body = TweetResponse),
        (status = 400, description = "Malformed ID or message too long", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    ),
    tag = "Tweets"
)]
pub async fn create_tweet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateTweetRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<TweetResponse>>)> {
    let user_id = parse_user_id(&id, "INVALID_USER_ID")?;

    let tweet = state
        .tweet_service
        .create_tweet(user_id, payload.message)
        .await?;
    let author = state.user_service.get_user(user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(
            "Tweet created successfully",
            TweetResponse::with_author(tweet, &author),
        )),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/users/:id/tweet", post(create_tweet))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{json_body, send, test_app};
    use crate::models::{ErrorResponse, SuccessResponse, TweetResponse, UserDetailResponse};
    use axum::http::StatusCode;
    use serde_json::json;

    async fn create_user(app: &axum::Router) -> UserDetailResponse {
        let response = send(
            app,
            "POST",
            "/api/v1/users",
            Some(json!({ "name": "Bob", "email": "b@x.com" })),
        )
        .await;
        let body: SuccessResponse<UserDetailResponse> = json_body(response).await;
        body.data.unwrap()
    }

    #[tokio::test]
    async fn test_create_tweet_includes_author_without_email() {
        let app = test_app(false);
        let bob = create_user(&app).await;

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/users/{}/tweet", bob.id),
            Some(json!({ "message": "hello" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["data"]["message"], "hello");
        assert_eq!(body["data"]["user"]["name"], "Bob");
        assert!(body["data"]["user"].get("email").is_none());

        let tweet: TweetResponse = serde_json::from_value(body["data"].clone()).unwrap();
        assert_eq!(tweet.user_id, bob.id);
    }

    #[tokio::test]
    async fn test_over_length_tweet_is_rejected() {
        let app = test_app(false);
        let bob = create_user(&app).await;

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/users/{}/tweet", bob.id),
            Some(json!({ "message": "a".repeat(281) })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.code, "VALIDATION_ERROR");

        let response = send(&app, "GET", &format!("/api/v1/users/{}", bob.id), None).await;
        let body: SuccessResponse<UserDetailResponse> = json_body(response).await;
        assert_eq!(body.data.unwrap().tweets_count, 0);
    }

    #[tokio::test]
    async fn test_tweet_for_unknown_user_is_not_found() {
        let app = test_app(false);

        let response = send(
            &app,
            "POST",
            &format!("/api/v1/users/{}/tweet", uuid::Uuid::new_v4()),
            Some(json!({ "message": "hello" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
