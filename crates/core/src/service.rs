//! Base type for domain services.

use crate::record::Record;
use crate::repository::Repository;

/// Base for domain services: owns the repository for its record type.
///
/// Business logic extends this; none is present here.
pub struct Service<T: Record> {
    repository: Repository<T>,
}

impl<T: Record> Service<T> {
    pub fn new(repository: Repository<T>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Repository<T> {
        &self.repository
    }
}
