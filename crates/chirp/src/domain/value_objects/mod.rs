//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod tweet_message;

pub use tweet_message::*;
