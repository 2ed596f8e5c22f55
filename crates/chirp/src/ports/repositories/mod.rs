//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod tweet_repository;
mod user_repository;

pub use tweet_repository::*;
pub use user_repository::*;
