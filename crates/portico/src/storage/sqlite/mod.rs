//! SQLite storage backend implementation.
//!
//! Implements the `TableStore` port using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping. Each logical table is
//! one SQLite table holding an autoincrement primary key and the row's
//! fields as JSON.

mod error;
mod schema;
mod store;

pub use store::SqliteTableStore;
