use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use ag_core::auth::AuthToken;
use ag_core::ports::TokenStorePort;

/// In-memory token store for tests and previews. Not durable.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<AuthToken>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self {
            inner: Mutex::new(token),
        }
    }
}

#[async_trait]
impl TokenStorePort for MemoryTokenStore {
    async fn save(&self, token: &AuthToken) -> Result<()> {
        *self.inner.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    async fn get(&self) -> Result<Option<AuthToken>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_get_clear() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get().await.unwrap(), None);

        store.save(&AuthToken::new("T")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(AuthToken::new("T")));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }
}
