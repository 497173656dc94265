use async_trait::async_trait;

use super::{Result, Row, Window};

/// Schema-less table store addressable by table name.
///
/// This is the port the generic repository talks to; the concrete backends
/// live in the application crate. Rows passed in must not carry an `id`
/// field (the store assigns primary keys); rows handed back always include
/// one. Result ordering is backend-defined.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Bulk-inserts rows into the named table.
    async fn insert_many(&self, table: &str, rows: Vec<Row>) -> Result<()>;

    /// Rows whose primary key is in `ids`.
    async fn find_by_ids(&self, table: &str, ids: &[i64]) -> Result<Vec<Row>>;

    /// Rows matching every field-value equality in `filters`.
    async fn find_by_filters(&self, table: &str, filters: &Row) -> Result<Vec<Row>>;

    /// The row with the given primary key, if any.
    async fn find_one(&self, table: &str, id: i64) -> Result<Option<Row>>;

    /// Every row, or the slice selected by `window`.
    async fn all(&self, table: &str, window: Option<Window>) -> Result<Vec<Row>>;

    /// Replaces the non-id fields of the row with the given primary key.
    /// Updating a missing id is a silent no-op.
    async fn update(&self, table: &str, id: i64, row: Row) -> Result<()>;

    /// Deletes the row with the given primary key; missing ids are ignored.
    async fn delete(&self, table: &str, id: i64) -> Result<()>;

    /// Trivial liveness query, used by the health probe.
    async fn ping(&self) -> Result<()>;
}
