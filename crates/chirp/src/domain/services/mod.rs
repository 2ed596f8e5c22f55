//! Domain Services
//!
//! Logic that spans several entities and only needs the repository ports.

mod timeline;

pub use timeline::*;
