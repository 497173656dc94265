//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of the `TableStore` port
//! that keeps every table in a HashMap behind an `Arc<RwLock<_>>`. Useful
//! for tests and ephemeral runs where persistence is not required.

mod store;

pub use store::InMemoryTableStore;
