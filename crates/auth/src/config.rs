use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AuthError;

/// Token-signing configuration.
///
/// Built once at process start and passed into whatever needs it; there is
/// no ambient settings singleton.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared signing secret.
    pub secret: String,
    /// Signing algorithm; HMAC family only.
    pub algorithm: Algorithm,
    /// How long issued tokens stay valid.
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Builds a config, rejecting non-HMAC algorithms.
    ///
    /// Signing here uses a shared secret, not a key pair, so the asymmetric
    /// algorithm identifiers are configuration errors.
    pub fn new(
        secret: impl Into<String>,
        algorithm: Algorithm,
        token_ttl: Duration,
    ) -> Result<Self, AuthError> {
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(AuthError::Config(format!(
                "unsupported signing algorithm {algorithm:?}; expected an HMAC variant"
            )));
        }

        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::Config("token secret must not be empty".to_string()));
        }

        Ok(Self {
            secret,
            algorithm,
            token_ttl,
        })
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TOKEN_SECRET`: shared signing secret (required)
    /// - `TOKEN_ALGORITHM`: signing algorithm (default: `HS256`)
    /// - `TOKEN_TTL_SECONDS`: token lifetime in seconds (default: 3600)
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = std::env::var("TOKEN_SECRET")
            .map_err(|_| AuthError::Config("TOKEN_SECRET must be set".to_string()))?;

        let algorithm = match std::env::var("TOKEN_ALGORITHM") {
            Ok(name) => name
                .parse()
                .map_err(|_| AuthError::Config(format!("unknown signing algorithm: {name}")))?,
            Err(_) => Algorithm::HS256,
        };

        let token_ttl = std::env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(3600));

        Self::new(secret, algorithm, token_ttl)
    }
}
