//! The record abstraction and its row conversions.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{RepositoryError, Result, Row};

/// A typed, field-named value stored and retrieved through a repository.
///
/// Records carry an optional integer primary key: `None` before insertion,
/// assigned by storage afterwards.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Entity name used in error messages.
    const KIND: &'static str;

    /// The primary key, if storage has assigned one.
    fn id(&self) -> Option<i64>;
}

/// Converts a record into the generic row shape, dropping type identity.
pub fn to_row<T: Record>(record: &T) -> Result<Row> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(RepositoryError::Serialization(format!(
            "{} does not serialize to an object",
            T::KIND
        ))),
        Err(e) => Err(RepositoryError::Serialization(e.to_string())),
    }
}

/// Builds a record from a stored row.
///
/// This is an explicit deserialization step: a row missing a required field,
/// or carrying one of the wrong shape, fails with a schema mismatch rather
/// than producing a partially-initialized record.
pub fn from_row<T: Record>(row: Row) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(row)).map_err(|e| {
        RepositoryError::SchemaMismatch {
            entity_type: T::KIND,
            detail: e.to_string(),
        }
    })
}
