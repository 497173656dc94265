//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use portico_core::auth::{AuthError as CoreAuthError, Claims};

use crate::error::AuthError;
use crate::state::AuthState;
use crate::token::verify_token;

/// Extractor for the verified bearer identity.
///
/// Verifies the `Authorization: Bearer` token on every request; a missing
/// header and a failing token get the same 401 with a `WWW-Authenticate`
/// challenge.
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| CoreAuthError::InvalidToken("missing bearer credentials".to_string()))?;

        let claims = verify_token(&auth_state.config, token)?;

        Ok(CurrentUser(claims))
    }
}
