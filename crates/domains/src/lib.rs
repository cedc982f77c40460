//! # domains
//!
//! Entities, error taxonomy and port traits of the forum backend.
//! Nothing in here performs I/O; adapters implement the traits in [`ports`].

pub mod error;
pub mod models;
pub mod payload;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use ports::*;
