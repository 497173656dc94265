//! The generic, table-scoped repository.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::record::{from_row, to_row, Record};
use crate::storage::{RepositoryError, Result, Row, TableStore, Window};

/// Table-scoped CRUD facade over a [`TableStore`].
///
/// Maps typed records to rows in one named table. Holds nothing beyond the
/// table name and the store handle; records are passed by value in and out.
/// No query language is exposed beyond equality filters and pagination, and
/// no field validation happens here: malformed records surface as store
/// errors.
pub struct Repository<T: Record> {
    store: Arc<dyn TableStore>,
    table: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            table: self.table.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    /// Creates a repository for `table` on the given store.
    pub fn new(store: Arc<dyn TableStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
            _record: PhantomData,
        }
    }

    /// The table this repository is scoped to.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Bulk-inserts records. No-op on empty input.
    ///
    /// The store assigns primary keys; generated ids are not reflected back
    /// onto the inputs, so callers re-fetch to learn them.
    pub async fn insert(&self, records: &[T]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut row = to_row(record)?;
            row.remove("id");
            rows.push(row);
        }
        self.store.insert_many(&self.table, rows).await
    }

    /// Records selected by primary key or by conjunctive equality filters.
    ///
    /// `ids` wins over `filters` when both are given. With neither, this
    /// matches nothing; use [`Repository::all`] for a full scan.
    pub async fn find(&self, ids: Option<&[i64]>, filters: &Row) -> Result<Vec<T>> {
        let rows = if let Some(ids) = ids {
            self.store.find_by_ids(&self.table, ids).await?
        } else if !filters.is_empty() {
            self.store.find_by_filters(&self.table, filters).await?
        } else {
            return Ok(Vec::new());
        };

        rows.into_iter().map(from_row).collect()
    }

    /// The record with the given primary key, or `None`.
    pub async fn find_one(&self, id: i64) -> Result<Option<T>> {
        match self.store.find_one(&self.table, id).await? {
            Some(row) => Ok(Some(from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Every record, optionally paginated.
    ///
    /// Pages are 1-indexed; `page` and `page_size` must be given together.
    pub async fn all(&self, page: Option<u32>, page_size: Option<u32>) -> Result<Vec<T>> {
        let window = match (page, page_size) {
            (None, None) => None,
            (Some(page), Some(page_size)) => Some(Window::for_page(page, page_size)?),
            _ => {
                return Err(RepositoryError::InvalidPagination(
                    "page and page_size must be provided together",
                ))
            }
        };

        let rows = self.store.all(&self.table, window).await?;
        rows.into_iter().map(from_row).collect()
    }

    /// Overwrites all non-id fields of the stored row with the record's.
    ///
    /// The record must carry an id. Updating an id with no stored row is a
    /// silent no-op at the store layer.
    pub async fn update(&self, record: &T) -> Result<()> {
        let id = record.id().ok_or(RepositoryError::MissingId {
            entity_type: T::KIND,
        })?;

        let mut row = to_row(record)?;
        row.remove("id");
        self.store.update(&self.table, id, row).await
    }

    /// Deletes the row with the given primary key; missing ids are ignored.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(&self.table, id).await
    }
}
