//! SQL statement builders for the dynamic table layout.
//!
//! Every table shares one shape: an autoincrement integer primary key and a
//! `data` column holding the row's fields as JSON. Table names are spliced
//! into the SQL text, so they are validated as identifiers first; values and
//! JSON paths always travel as bound parameters.

use portico_core::storage::{RepositoryError, Result};

/// Validates that a table name is a plain identifier before it appears in
/// SQL text.
pub fn validate_table_name(table: &str) -> Result<()> {
    let mut chars = table.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidData(format!(
            "invalid table name: {table:?}"
        )))
    }
}

pub fn create_table(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{table}\" \
         (id INTEGER PRIMARY KEY AUTOINCREMENT, data TEXT NOT NULL)"
    )
}

pub fn insert_row(table: &str) -> String {
    format!("INSERT INTO \"{table}\" (data) VALUES (?1)")
}

pub fn select_by_ids(table: &str, id_count: usize) -> String {
    let placeholders = (1..=id_count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT id, data FROM \"{table}\" WHERE id IN ({placeholders})")
}

pub fn select_by_filters(table: &str, filter_count: usize) -> String {
    let clauses = (0..filter_count)
        .map(|i| format!("json_extract(data, ?{}) = ?{}", 2 * i + 1, 2 * i + 2))
        .collect::<Vec<_>>()
        .join(" AND ");
    format!("SELECT id, data FROM \"{table}\" WHERE {clauses}")
}

pub fn select_one(table: &str) -> String {
    format!("SELECT id, data FROM \"{table}\" WHERE id = ?1")
}

pub fn select_all(table: &str) -> String {
    format!("SELECT id, data FROM \"{table}\"")
}

pub fn select_window(table: &str) -> String {
    format!("SELECT id, data FROM \"{table}\" LIMIT ?1 OFFSET ?2")
}

pub fn update_row(table: &str) -> String {
    format!("UPDATE \"{table}\" SET data = ?1 WHERE id = ?2")
}

pub fn delete_row(table: &str) -> String {
    format!("DELETE FROM \"{table}\" WHERE id = ?1")
}

pub const PING: &str = "SELECT 1";
