//! Chirp Data Models
//!
//! Request/response DTOs for the HTTP API. Domain entities never leave
//! the server directly.

mod response;
mod tweet;
mod user;

pub use response::*;
pub use tweet::*;
pub use user::*;
