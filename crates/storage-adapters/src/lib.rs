//! # storage-adapters
//!
//! Concrete backends for the repository ports declared in `domains`.
//!
//! - [`memory`] keeps everything in `dashmap` tables and is always compiled.
//! - `postgres` (feature `db-postgres`) talks to PostgreSQL through sqlx.
//!
//! [`support`] holds the clock and id generator both backends are built with.

pub mod memory;
pub mod support;

#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use memory::MemoryStore;
pub use support::{SystemDateProvider, UuidIdGenerator};
