mod error;
mod traits;
mod types;

pub use error::{AuthError, Result};
pub use traits::Authenticator;
pub use types::{Claims, Credentials};
