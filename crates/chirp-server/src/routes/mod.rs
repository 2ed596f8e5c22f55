//! Chirp API Routes
//!
//! - /ping, /health - Liveness
//! - /api/v1/users - Registration and lookup
//! - /api/v1/users/:id/follow/:following_user_id - Follow edges
//! - /api/v1/users/:id/timeline - Aggregated timeline
//! - /api/v1/users/:id/tweet - Posting

pub mod error;
pub mod health;
pub mod swagger;
pub mod tweets;
pub mod users;

#[cfg(test)]
mod test_support;
