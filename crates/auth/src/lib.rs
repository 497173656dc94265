//! Stateless bearer-token authentication for portico.
//!
//! This crate provides:
//! - Token issue/verify on a shared HMAC secret
//! - The `/login` route exchanging credentials for a bearer token
//! - An axum extractor verifying the token on each request

mod config;
mod error;
mod extractors;
mod handlers;
mod state;
mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use handlers::auth_routes;
pub use state::AuthState;
pub use token::{issue_token, verify_token};
