use super::{RepositoryError, Result};

/// Generic row representation handed across the store boundary: field name
/// to JSON value. Typed records are converted to and from this shape in
/// [`crate::record`]; rows returned by a store always carry an `id` field.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// A storage-side slice of a table scan, expressed as offset/limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

impl Window {
    /// Window covering a 1-indexed page of `page_size` rows.
    pub fn for_page(page: u32, page_size: u32) -> Result<Self> {
        if page == 0 || page_size == 0 {
            return Err(RepositoryError::InvalidPagination(
                "page and page_size are 1-based",
            ));
        }
        Ok(Self {
            offset: (u64::from(page) - 1) * u64::from(page_size),
            limit: u64::from(page_size),
        })
    }
}
