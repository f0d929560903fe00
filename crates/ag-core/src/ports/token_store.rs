//! Token store port.
//!
//! Persists the single auth token across sessions. Backed by simple
//! key-value settings storage in the reference adapter; not secure storage.

use async_trait::async_trait;

use crate::auth::AuthToken;

#[async_trait]
pub trait TokenStorePort: Send + Sync {
    /// Persist the token, replacing any previous one.
    async fn save(&self, token: &AuthToken) -> anyhow::Result<()>;

    /// Get the stored token, if any.
    async fn get(&self) -> anyhow::Result<Option<AuthToken>>;

    /// Remove the stored token. Removing an absent token is not an error.
    async fn clear(&self) -> anyhow::Result<()>;
}
