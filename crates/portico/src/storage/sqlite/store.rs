//! SQLite table store.
//!
//! One SQLite table per logical table: an autoincrement `id` plus the row's
//! fields serialized as JSON in a `data` column. Tables are created lazily
//! the first time they are touched, so reads against a never-written table
//! behave like reads against an empty one. Equality filters go through
//! `json_extract` with the JSON path bound as a parameter.

use async_trait::async_trait;
use portico_core::storage::{RepositoryError, Result, Row, TableStore, Window};
use tokio_rusqlite::Connection;

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Encode the non-id fields of a row for the `data` column.
fn encode_data(row: &Row) -> Result<String> {
    serde_json::to_string(row).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Rebuild a row from the `id` and `data` columns.
fn row_from_columns(id: i64, data: String) -> rusqlite::Result<Row> {
    let mut row: Row = serde_json::from_str(&data).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    row.insert("id".to_string(), serde_json::Value::from(id));
    Ok(row)
}

/// Convert a JSON value into a SQLite binding that compares with
/// `json_extract` output.
fn bind_value(value: &serde_json::Value) -> rusqlite::types::Value {
    use rusqlite::types::Value as Sql;

    match value {
        serde_json::Value::Null => Sql::Null,
        serde_json::Value::Bool(b) => Sql::Integer(i64::from(*b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Sql::Integer(i),
            None => Sql::Real(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Sql::Text(s.clone()),
        // arrays and objects compare against json_extract's JSON text form
        other => Sql::Text(other.to_string()),
    }
}

/// SQLite-backed table store.
pub struct SqliteTableStore {
    conn: Connection,
}

impl SqliteTableStore {
    /// Opens a file-backed store.
    ///
    /// The database file is created if it doesn't exist.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path.to_string())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Opens an in-memory store.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl TableStore for SqliteTableStore {
    async fn insert_many(&self, table: &str, rows: Vec<Row>) -> Result<()> {
        schema::validate_table_name(table)?;
        if rows.is_empty() {
            return Ok(());
        }

        let create = schema::create_table(table);
        let insert = schema::insert_row(table);
        let mut payloads = Vec::with_capacity(rows.len());
        for row in &rows {
            payloads.push(encode_data(row)?);
        }

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                let tx = conn.transaction().map_err(wrap_err)?;
                {
                    let mut stmt = tx.prepare(&insert).map_err(wrap_err)?;
                    for data in &payloads {
                        stmt.execute([data]).map_err(wrap_err)?;
                    }
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_ids(&self, table: &str, ids: &[i64]) -> Result<Vec<Row>> {
        schema::validate_table_name(table)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let create = schema::create_table(table);
        let select = schema::select_by_ids(table, ids.len());
        let ids = ids.to_vec();

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                let mut stmt = conn.prepare(&select).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
                        row_from_columns(row.get(0)?, row.get(1)?)
                    })
                    .map_err(wrap_err)?;

                let mut found = Vec::new();
                for row_result in rows {
                    found.push(row_result.map_err(wrap_err)?);
                }
                Ok(found)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_filters(&self, table: &str, filters: &Row) -> Result<Vec<Row>> {
        schema::validate_table_name(table)?;
        if filters.is_empty() {
            return Ok(Vec::new());
        }

        let create = schema::create_table(table);
        let select = schema::select_by_filters(table, filters.len());
        let mut params: Vec<rusqlite::types::Value> = Vec::with_capacity(filters.len() * 2);
        for (field, value) in filters {
            params.push(rusqlite::types::Value::Text(format!("$.{field}")));
            params.push(bind_value(value));
        }

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                let mut stmt = conn.prepare(&select).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params), |row| {
                        row_from_columns(row.get(0)?, row.get(1)?)
                    })
                    .map_err(wrap_err)?;

                let mut found = Vec::new();
                for row_result in rows {
                    found.push(row_result.map_err(wrap_err)?);
                }
                Ok(found)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_one(&self, table: &str, id: i64) -> Result<Option<Row>> {
        schema::validate_table_name(table)?;

        let create = schema::create_table(table);
        let select = schema::select_one(table);

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                let mut stmt = conn.prepare(&select).map_err(wrap_err)?;
                match stmt.query_row([id], |row| row_from_columns(row.get(0)?, row.get(1)?)) {
                    Ok(row) => Ok(Some(row)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn all(&self, table: &str, window: Option<Window>) -> Result<Vec<Row>> {
        schema::validate_table_name(table)?;

        let create = schema::create_table(table);
        let select = match window {
            Some(_) => schema::select_window(table),
            None => schema::select_all(table),
        };

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                let mut stmt = conn.prepare(&select).map_err(wrap_err)?;
                let map_row =
                    |row: &rusqlite::Row<'_>| row_from_columns(row.get(0)?, row.get(1)?);
                let rows = match window {
                    Some(window) => stmt
                        .query_map(
                            rusqlite::params![window.limit as i64, window.offset as i64],
                            map_row,
                        )
                        .map_err(wrap_err)?,
                    None => stmt.query_map([], map_row).map_err(wrap_err)?,
                };

                let mut found = Vec::new();
                for row_result in rows {
                    found.push(row_result.map_err(wrap_err)?);
                }
                Ok(found)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update(&self, table: &str, id: i64, row: Row) -> Result<()> {
        schema::validate_table_name(table)?;

        let create = schema::create_table(table);
        let update = schema::update_row(table);
        let data = encode_data(&row)?;

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;

                // zero affected rows means the id does not exist; deliberately
                // not an error
                conn.execute(&update, rusqlite::params![data, id])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete(&self, table: &str, id: i64) -> Result<()> {
        schema::validate_table_name(table)?;

        let create = schema::create_table(table);
        let delete = schema::delete_row(table);

        self.conn
            .call(move |conn| {
                conn.execute(&create, []).map_err(wrap_err)?;
                conn.execute(&delete, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |_| Ok(())).map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use portico_core::repository::Repository;
    use serde_json::json;

    use super::*;
    use crate::storage::testutil::{people, Person};

    async fn repository() -> Repository<Person> {
        let store = SqliteTableStore::open_in_memory().await.unwrap();
        Repository::new(Arc::new(store), "people")
    }

    fn age_filter(age: i64) -> Row {
        let mut filters = Row::new();
        filters.insert("age".to_string(), json!(age));
        filters
    }

    #[tokio::test]
    async fn test_insert_then_all_round_trips() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let results = repo.all(None, None).await.unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|p| p.id.is_some()));

        let john = results.iter().find(|p| p.name == "John").unwrap();
        assert_eq!(john.email, "john@example.com");
        assert_eq!(john.age, 30);
    }

    #[tokio::test]
    async fn test_find_by_ids() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let found = repo.find(Some(&[1]), &Row::new()).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "John");
    }

    #[tokio::test]
    async fn test_find_by_field_filter_matches_the_same_row() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let by_id = repo.find(Some(&[1]), &Row::new()).await.unwrap();
        let by_age = repo.find(None, &age_filter(30)).await.unwrap();

        assert_eq!(by_id, by_age);
        assert_eq!(by_age[0].name, "John");
    }

    #[tokio::test]
    async fn test_find_with_conjunctive_filters() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let mut filters = age_filter(30);
        filters.insert("name".to_string(), json!("John"));
        assert_eq!(repo.find(None, &filters).await.unwrap().len(), 1);

        // same age, wrong name: conjunction fails
        let mut filters = age_filter(30);
        filters.insert("name".to_string(), json!("Jane"));
        assert!(repo.find(None, &filters).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_with_no_arguments_returns_nothing() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let found = repo.find(None, &Row::new()).await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_one_returns_the_record_or_none() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let found = repo.find_one(1).await.unwrap().unwrap();
        assert_eq!(found.id, Some(1));
        assert_eq!(found.name, "John");
        assert_eq!(found.email, "john@example.com");
        assert_eq!(found.age, 30);

        assert!(repo.find_one(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_all_paginates_with_storage_side_windows() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let page1 = repo.all(Some(1), Some(2)).await.unwrap();
        let page2 = repo.all(Some(2), Some(2)).await.unwrap();
        let page3 = repo.all(Some(3), Some(2)).await.unwrap();

        assert_eq!(page1.len(), 2);
        assert_eq!(page2.len(), 1);
        assert!(page3.is_empty());
    }

    #[tokio::test]
    async fn test_all_rejects_partial_pagination() {
        let repo = repository().await;

        assert!(matches!(
            repo.all(Some(1), None).await,
            Err(RepositoryError::InvalidPagination(_))
        ));
        assert!(matches!(
            repo.all(None, Some(10)).await,
            Err(RepositoryError::InvalidPagination(_))
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_the_whole_row() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let mut person = repo.find_one(1).await.unwrap().unwrap();
        person.name = "Johnny".to_string();
        repo.update(&person).await.unwrap();

        let updated = repo.find_one(1).await.unwrap().unwrap();
        assert_eq!(updated.name, "Johnny");
        // untouched fields survive the full-row overwrite
        assert_eq!(updated.email, "john@example.com");
        assert_eq!(updated.age, 30);
    }

    #[tokio::test]
    async fn test_update_of_a_missing_id_is_a_silent_noop() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        let ghost = Person {
            id: Some(999),
            ..Person::new("Ghost", "ghost@example.com", 0)
        };
        repo.update(&ghost).await.unwrap();

        assert!(repo.find_one(999).await.unwrap().is_none());
        assert_eq!(repo.all(None, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repository().await;
        repo.insert(&people()).await.unwrap();

        repo.delete(1).await.unwrap();

        let results = repo.all(None, None).await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.id != Some(1)));

        // deleting again is not an error
        repo.delete(1).await.unwrap();
        assert_eq!(repo.all(None, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reads_before_any_write_see_an_empty_table() {
        let repo = repository().await;

        assert!(repo.all(None, None).await.unwrap().is_empty());
        assert!(repo.find_one(1).await.unwrap().is_none());
        assert!(repo.find(Some(&[1]), &Row::new()).await.unwrap().is_empty());
        assert!(repo.find(None, &age_filter(30)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_hostile_table_names_are_rejected() {
        let store = SqliteTableStore::open_in_memory().await.unwrap();
        let repo: Repository<Person> = Repository::new(Arc::new(store), "people; DROP TABLE x");

        assert!(matches!(
            repo.insert(&people()).await,
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_ping_succeeds_on_a_live_connection() {
        let store = SqliteTableStore::open_in_memory().await.unwrap();
        store.ping().await.unwrap();
    }
}
