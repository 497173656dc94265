use thiserror::Error;

/// Errors that can occur during repository and table-store operations.
///
/// A missing row on a point lookup is not an error; those operations return
/// `Ok(None)` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} row does not match the record schema: {detail}")]
    SchemaMismatch {
        entity_type: &'static str,
        detail: String,
    },
    #[error("{entity_type} record has no id")]
    MissingId { entity_type: &'static str },
    #[error("invalid pagination: {0}")]
    InvalidPagination(&'static str),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
