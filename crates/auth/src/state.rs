//! Shared state for auth handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use portico_core::auth::Authenticator;

use crate::config::AuthConfig;

/// Shared state for auth handlers: the signing config and the injected
/// identity-verification hook.
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AuthState {
    pub fn new(config: AuthConfig, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            config,
            authenticator,
        }
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
