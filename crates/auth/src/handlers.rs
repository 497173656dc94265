//! HTTP handlers for auth routes.

use axum::{
    extract::{FromRef, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use portico_core::auth::{AuthError as CoreAuthError, Credentials};

use crate::error::AuthError;
use crate::state::AuthState;
use crate::token::issue_token;

/// Creates the auth router.
///
/// Routes:
/// - `POST /login` - Exchange credentials for a bearer token
pub fn auth_routes<S>() -> Router<S>
where
    AuthState: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/login", post(login))
}

/// POST /login - verify credentials through the identity hook and issue a
/// bearer token.
///
/// The token travels in the `Authorization` response header; the body stays
/// empty. Failed credentials get a uniform 401 whether the user is unknown
/// or the password is wrong.
async fn login(
    State(auth): State<AuthState>,
    Json(credentials): Json<Credentials>,
) -> Result<Response, AuthError> {
    let user_id = auth
        .authenticator
        .authenticate(&credentials)
        .await?
        .ok_or(CoreAuthError::InvalidCredentials)?;

    let token = issue_token(&auth.config, user_id, &credentials.username)?;

    tracing::debug!(user_id, "login succeeded");

    Ok((
        StatusCode::OK,
        [(header::AUTHORIZATION, format!("Bearer {token}"))],
    )
        .into_response())
}
