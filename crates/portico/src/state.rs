//! Shared application state.

use std::sync::Arc;

use portico_auth::AuthState;
use portico_core::storage::TableStore;

/// Shared application state: the table-store handle and the auth state.
///
/// Everything here is an immutable handle; requests never coordinate through
/// shared mutable state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TableStore>,
    auth: AuthState,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, auth: AuthState) -> Self {
        Self { store, auth }
    }

    /// Handle to the underlying table store.
    pub fn store(&self) -> &Arc<dyn TableStore> {
        &self.store
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}
