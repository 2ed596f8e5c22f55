//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateTweetRequest, CreateUserRequest, ErrorResponse, FollowListResponse, TweetResponse,
    UserDetailResponse, UserResponse,
};

use super::health::{HealthCheck, Pong};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health::ping,
        super::health::health_check,
        super::users::create_user,
        super::users::get_user,
        super::users::follow_user,
        super::users::get_user_timeline,
        super::users::get_followers,
        super::users::get_following,
        super::tweets::create_tweet,
    ),
    components(schemas(
        CreateUserRequest,
        CreateTweetRequest,
        UserResponse,
        UserDetailResponse,
        FollowListResponse,
        TweetResponse,
        ErrorResponse,
        HealthCheck,
        Pong,
    )),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "Registration, follow graph and timelines"),
        (name = "Tweets", description = "Posting tweets"),
    ),
    info(
        title = "Chirp API",
        description = "Microblogging backend: users, follows and aggregated timelines. Successful responses are wrapped as {message, data}."
    )
)]
pub struct ApiDoc;
