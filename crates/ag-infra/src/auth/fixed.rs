use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use ag_core::auth::{AuthError, AuthToken};
use ag_core::ports::AuthPort;

const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Authenticator that accepts exactly one credential pair after a fixed
/// artificial delay. Stands in for a real authentication backend.
pub struct FixedCredentialAuthenticator {
    username: String,
    password: String,
    token: AuthToken,
    delay: Duration,
}

impl FixedCredentialAuthenticator {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        token: AuthToken,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for FixedCredentialAuthenticator {
    fn default() -> Self {
        Self::new("user", "password", AuthToken::new("fake-auth-token"))
    }
}

#[async_trait]
impl AuthPort for FixedCredentialAuthenticator {
    async fn login(&self, username: &str, password: &str) -> Result<AuthToken, AuthError> {
        tokio::time::sleep(self.delay).await;
        if username == self.username && password == self.password {
            debug!(username, "accepted fixed credentials");
            Ok(self.token.clone())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn accepts_the_configured_pair() {
        let auth = FixedCredentialAuthenticator::default();
        let token = auth.login("user", "password").await.unwrap();
        assert_eq!(token, AuthToken::new("fake-auth-token"));
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_everything_else() {
        let auth = FixedCredentialAuthenticator::default();
        assert_eq!(
            auth.login("user", "wrong").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            auth.login("", "").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_only_after_the_configured_delay() {
        let auth = FixedCredentialAuthenticator::default().with_delay(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        auth.login("user", "password").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
