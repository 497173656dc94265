use serde::{Deserialize, Serialize};

/// Username/password pair supplied at login. Transient; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signed token payload: who the bearer is and when the token lapses.
///
/// Tokens are never stored server-side; each request is verified on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub user_name: String,
    /// Expiry as unix seconds.
    pub exp: i64,
}
