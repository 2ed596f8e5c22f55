//! User Routes - Registration, follow graph and timelines
//!
//! HTTP handlers that delegate to UserService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use crate::models::{
    CreateUserRequest, ErrorResponse, FollowListResponse, SuccessResponse, TweetResponse,
    UserDetailResponse,
};
use crate::AppState;

/// Parse a path segment as a user ID, tagging failures with `code`
pub(crate) fn parse_user_id(raw: &str, code: &'static str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId { code })
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; data is a UserDetailResponse", body = UserDetailResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<UserDetailResponse>>)> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new("User created successfully", user.into())),
    ))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found; data is a UserDetailResponse", body = UserDetailResponse),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<UserDetailResponse>>> {
    let id = parse_user_id(&id, "INVALID_USER_ID")?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(SuccessResponse::new(
        "User retrieved successfully",
        user.into(),
    )))
}

/// Follow another user
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/follow/{following_user_id}",
    params(
        ("id" = Uuid, Path, description = "Follower ID"),
        ("following_user_id" = Uuid, Path, description = "ID of the user to follow")
    ),
    responses(
        (status = 201, description = "User followed"),
        (status = 400, description = "Malformed ID or self-follow", body = ErrorResponse),
        (status = 404, description = "Either user not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn follow_user(
    State(state): State<AppState>,
    Path((id, followed_id)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<()>>)> {
    let id = parse_user_id(&id, "INVALID_USER_ID")?;
    let followed_id = parse_user_id(&followed_id, "INVALID_FOLLOWED_USER_ID")?;

    state.user_service.follow_user(id, followed_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::message_only("User followed successfully")),
    ))
}

/// Timeline: tweets of every followed user
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/timeline",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Timeline; data is a list of tweets", body = Vec<TweetResponse>),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<Vec<TweetResponse>>>> {
    let id = parse_user_id(&id, "INVALID_USER_ID")?;
    let tweets = state.user_service.get_user_timeline(id).await?;

    Ok(Json(SuccessResponse::new(
        "Timeline retrieved successfully",
        tweets.into_iter().map(Into::into).collect(),
    )))
}

/// IDs of users following this user
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/followers",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Follower IDs", body = FollowListResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_followers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<FollowListResponse>>> {
    let id = parse_user_id(&id, "INVALID_USER_ID")?;
    let ids = state.user_service.get_followers(id).await?;

    Ok(Json(SuccessResponse::new(
        "Followers retrieved successfully",
        FollowListResponse { user_id: id, ids },
    )))
}

/// IDs of users this user follows
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/following",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Followed IDs", body = FollowListResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_following(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse<FollowListResponse>>> {
    let id = parse_user_id(&id, "INVALID_USER_ID")?;
    let ids = state.user_service.get_following(id).await?;

    Ok(Json(SuccessResponse::new(
        "Following retrieved successfully",
        FollowListResponse { user_id: id, ids },
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/:id", get(get_user))
        .route(
            "/api/v1/users/:id/follow/:following_user_id",
            post(follow_user),
        )
        .route("/api/v1/users/:id/timeline", get(get_user_timeline))
        .route("/api/v1/users/:id/followers", get(get_followers))
        .route("/api/v1/users/:id/following", get(get_following))
}
