//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// Opaque session token returned by a successful authentication.
///
/// The token is treated as a plain string everywhere; its structure belongs
/// to the authentication backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Authentication failure surfaced to the login flow.
///
/// The `Display` text of a variant is what ends up in
/// [`crate::login::LoginState::error_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}
