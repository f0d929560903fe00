//! Authentication port.

use async_trait::async_trait;

use crate::auth::{AuthError, AuthToken};

/// Abstracts the authentication backend.
///
/// Failures are typed; anything the backend reports surfaces to the user
/// through the state machine's failure path, never as a panic or a
/// propagated error.
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<AuthToken, AuthError>;
}
