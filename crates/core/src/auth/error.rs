use thiserror::Error;

/// Auth failures as seen by the core.
///
/// Token verification collapses every failure mode into `InvalidToken`;
/// which check failed is deliberately not observable.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("identity hook error: {0}")]
    Hook(String),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
