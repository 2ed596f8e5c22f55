//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: Registered account and its side of the follow graph
//! - Tweet: Short message authored by a user

mod tweet;
mod user;

pub use tweet::*;
pub use user::*;
