//! In-memory table store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use portico_core::storage::{Result, Row, TableStore, Window};
use tokio::sync::RwLock;

/// One named table: the assigned rows plus the id counter.
///
/// Rows are stored without their `id` field; it is injected on the way out,
/// mirroring the id/data split of the SQLite backend.
#[derive(Debug, Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

/// Clone a stored row with its `id` field restored.
fn with_id(id: i64, row: &Row) -> Row {
    let mut row = row.clone();
    row.insert("id".to_string(), serde_json::Value::from(id));
    row
}

/// In-memory table store.
///
/// Data is not persisted and is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryTableStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn insert_many(&self, table: &str, rows: Vec<Row>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let mut tables = self.tables.write().await;
        let table = tables.entry(table.to_string()).or_default();
        for row in rows {
            table.next_id += 1;
            table.rows.insert(table.next_id, row);
        }
        Ok(())
    }

    async fn find_by_ids(&self, table: &str, ids: &[i64]) -> Result<Vec<Row>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(table) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| table.rows.get(id).map(|row| with_id(*id, row)))
            .collect())
    }

    async fn find_by_filters(&self, table: &str, filters: &Row) -> Result<Vec<Row>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(table) else {
            return Ok(Vec::new());
        };

        Ok(table
            .rows
            .iter()
            .filter(|(_, row)| filters.iter().all(|(field, value)| row.get(field) == Some(value)))
            .map(|(id, row)| with_id(*id, row))
            .collect())
    }

    async fn find_one(&self, table: &str, id: i64) -> Result<Option<Row>> {
        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .and_then(|table| table.rows.get(&id))
            .map(|row| with_id(id, row)))
    }

    async fn all(&self, table: &str, window: Option<Window>) -> Result<Vec<Row>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(table) else {
            return Ok(Vec::new());
        };

        let rows = table.rows.iter().map(|(id, row)| with_id(*id, row));
        Ok(match window {
            Some(window) => rows
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .collect(),
            None => rows.collect(),
        })
    }

    async fn update(&self, table: &str, id: i64, row: Row) -> Result<()> {
        let mut tables = self.tables.write().await;
        // a missing table or id is a silent no-op
        if let Some(slot) = tables.get_mut(table).and_then(|table| table.rows.get_mut(&id)) {
            *slot = row;
        }
        Ok(())
    }

    async fn delete(&self, table: &str, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if let Some(table) = tables.get_mut(table) {
            table.rows.remove(&id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
