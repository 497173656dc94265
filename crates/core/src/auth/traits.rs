use async_trait::async_trait;

use super::{Credentials, Result};

/// External identity-verification hook.
///
/// Given credentials, resolves a stable user identifier, or `None` when they
/// match no account. Deployments supply the lookup and password-checking
/// mechanism; this repository ships no implementation.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Option<i64>>;
}
