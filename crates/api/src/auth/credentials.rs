//! Parsing of the `Authorization` header into a credential pair.
//!
//! Two schemes are accepted:
//!
//! ```text
//! Authorization: Basic base64(<username or token>:<password>)
//! Authorization: Bearer <token>
//! ```
//!
//! A bearer token is treated as a Basic credential with an empty password.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sherlock_core::error::CoreError;

/// Credentials presented by a client, not yet verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Either a username or a previously issued auth token.
    pub username_or_token: String,
    /// Ignored when `username_or_token` is a valid token.
    pub password: String,
}

impl Credentials {
    /// Extract credentials from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, CoreError> {
        let value = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

        Self::parse(value)
    }

    /// Parse a raw `Authorization` header value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let (scheme, payload) = value
            .trim()
            .split_once(' ')
            .ok_or_else(invalid_format)?;
        let payload = payload.trim();

        if scheme.eq_ignore_ascii_case("basic") {
            let decoded = STANDARD.decode(payload).map_err(|_| invalid_format())?;
            let decoded = String::from_utf8(decoded).map_err(|_| invalid_format())?;
            let (user, password) = decoded.split_once(':').ok_or_else(invalid_format)?;
            Ok(Self {
                username_or_token: user.to_string(),
                password: password.to_string(),
            })
        } else if scheme.eq_ignore_ascii_case("bearer") && !payload.is_empty() {
            Ok(Self {
                username_or_token: payload.to_string(),
                password: String::new(),
            })
        } else {
            Err(invalid_format())
        }
    }
}

fn invalid_format() -> CoreError {
    CoreError::Unauthorized(
        "Invalid Authorization format. Expected: Basic <credentials> or Bearer <token>".into(),
    )
}
