//! Token issue and verification.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use portico_core::auth::{AuthError as CoreAuthError, Claims};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issues a signed bearer token embedding the user identity.
///
/// Expiry is `now + token_ttl` from the config.
pub fn issue_token(config: &AuthConfig, user_id: i64, user_name: &str) -> Result<String, AuthError> {
    let expires_at = Utc::now() + chrono::Duration::seconds(config.token_ttl.as_secs() as i64);
    let claims = Claims {
        user_id,
        user_name: user_name.to_string(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Encoding(e.to_string()))
}

/// Verifies a bearer token and returns its claims.
///
/// Bad signature, expiry, malformed claims, and malformed structure all
/// collapse into the same invalid-token rejection; which check failed is not
/// observable from the outside.
pub fn verify_token(config: &AuthConfig, token: &str) -> Result<Claims, AuthError> {
    let validation = Validation::new(config.algorithm);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| CoreAuthError::InvalidToken(e.to_string()).into())
}
