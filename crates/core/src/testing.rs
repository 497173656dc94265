//! Shared test fixtures: a sample record and a scripted table store.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::storage::{Result, Row, TableStore, Window};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Person {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

impl Record for Person {
    const KIND: &'static str = "Person";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Every call a [`StubStore`] has received, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    InsertMany { table: String, rows: Vec<Row> },
    FindByIds { table: String, ids: Vec<i64> },
    FindByFilters { table: String, filters: Row },
    FindOne { table: String, id: i64 },
    All { table: String, window: Option<Window> },
    Update { table: String, id: i64, row: Row },
    Delete { table: String, id: i64 },
}

/// Table store that records calls and replays canned rows.
#[derive(Debug, Default)]
pub(crate) struct StubStore {
    calls: Mutex<Vec<Call>>,
    rows: Vec<Row>,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose read operations return the given rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rows,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TableStore for StubStore {
    async fn insert_many(&self, table: &str, rows: Vec<Row>) -> Result<()> {
        self.record(Call::InsertMany {
            table: table.to_string(),
            rows,
        });
        Ok(())
    }

    async fn find_by_ids(&self, table: &str, ids: &[i64]) -> Result<Vec<Row>> {
        self.record(Call::FindByIds {
            table: table.to_string(),
            ids: ids.to_vec(),
        });
        Ok(self.rows.clone())
    }

    async fn find_by_filters(&self, table: &str, filters: &Row) -> Result<Vec<Row>> {
        self.record(Call::FindByFilters {
            table: table.to_string(),
            filters: filters.clone(),
        });
        Ok(self.rows.clone())
    }

    async fn find_one(&self, table: &str, id: i64) -> Result<Option<Row>> {
        self.record(Call::FindOne {
            table: table.to_string(),
            id,
        });
        Ok(self.rows.first().cloned())
    }

    async fn all(&self, table: &str, window: Option<Window>) -> Result<Vec<Row>> {
        self.record(Call::All {
            table: table.to_string(),
            window,
        });
        Ok(self.rows.clone())
    }

    async fn update(&self, table: &str, id: i64, row: Row) -> Result<()> {
        self.record(Call::Update {
            table: table.to_string(),
            id,
            row,
        });
        Ok(())
    }

    async fn delete(&self, table: &str, id: i64) -> Result<()> {
        self.record(Call::Delete {
            table: table.to_string(),
            id,
        });
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
