//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- time-limited signed auth tokens.
//! - [`credentials`] -- parsing of the `Authorization` header.
//! - [`gate`] -- resolves presented credentials to a stored user.

pub mod credentials;
pub mod gate;
pub mod password;
pub mod token;
