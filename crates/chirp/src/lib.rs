//! Chirp Domain Library
//!
//! Core domain types and interfaces for the Chirp microblogging backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Tweet)
//!   - `value_objects/`: Immutable value types (TweetMessage)
//!   - `services/`: Domain services (timeline aggregation)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use chirp::domain::{User, Tweet};
//! use chirp::ports::{UserRepository, TweetRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    aggregate_timeline, DomainError, NewTweet, Tweet, TweetMessage, User, MAX_TWEET_LENGTH,
};
pub use ports::{TweetRepository, UserRepository};
