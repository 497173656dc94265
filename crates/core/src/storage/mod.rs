mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::TableStore;
pub use types::{Row, Window};
