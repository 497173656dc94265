use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Auth errors for the portico_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific variants for
/// configuration and token construction.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (rejections, hook failures).
    #[error(transparent)]
    Core(#[from] portico_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Token construction failed.
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use portico_core::auth::AuthError as CoreError;

        match &self {
            AuthError::Core(CoreError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Invalid username or password" })),
            )
                .into_response(),
            AuthError::Core(CoreError::InvalidToken(_)) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(json!({ "detail": "Invalid token" })),
            )
                .into_response(),
            AuthError::Core(CoreError::Hook(_)) | AuthError::Config(_) | AuthError::Encoding(_) => {
                tracing::error!("Auth error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
