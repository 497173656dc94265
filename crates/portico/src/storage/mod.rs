//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `TableStore` port
//! defined in `portico_core::storage`. The implementations are selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory` (default): in-memory backend for tests and ephemeral runs

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p portico --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTableStore;

#[cfg(feature = "inmemory")]
#[allow(unused_imports)]
pub use inmemory::InMemoryTableStore;

#[cfg(test)]
pub(crate) mod testutil;
