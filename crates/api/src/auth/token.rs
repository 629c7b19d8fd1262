//! Signed, time-limited auth tokens.
//!
//! Tokens are HS256-signed JWTs whose subject is the user's id. They stand in
//! for a username in HTTP Basic credentials, so a client can authenticate
//! without resending its password until the token expires.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sherlock_core::types::DbId;
use uuid::Uuid;

/// Claims embedded in every auth token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for token issuing and validation.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Lifetime of tokens issued by `GET /auth_token`, in seconds.
    pub ttl_secs: i64,
}

/// Default token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 600;

impl TokenConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `SECRET_KEY`    | **yes**  | --      |
    /// | `TOKEN_TIMEOUT` | no       | `600`   |
    ///
    /// # Panics
    ///
    /// Panics if `SECRET_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SECRET_KEY").expect("SECRET_KEY must be set in the environment");
        assert!(!secret.is_empty(), "SECRET_KEY must not be empty");

        let ttl_secs: i64 = std::env::var("TOKEN_TIMEOUT")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse()
            .expect("TOKEN_TIMEOUT must be a valid i64");

        Self { secret, ttl_secs }
    }
}

/// Issue a token for `user_id` that expires `ttl_secs` from now.
pub fn issue_token(
    user_id: DbId,
    ttl_secs: i64,
    config: &TokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        exp: now + ttl_secs,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Fails on a bad signature, a malformed token, or an expired `exp`.
pub fn validate_token(
    token: &str,
    config: &TokenConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.leeway = 0;
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
