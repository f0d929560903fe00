use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use ag_core::auth::AuthToken;
use ag_core::ports::TokenStorePort;

/// File-backed token store.
///
/// Holds the single token key as a small JSON document, written atomically
/// via a temp file rename. This is plain settings storage, not secure
/// storage; moving to the platform keychain is a known hardening item.
pub struct FileTokenStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: AuthToken,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create token dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp token file failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp token file to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl TokenStorePort for FileTokenStore {
    async fn save(&self, token: &AuthToken) -> Result<()> {
        let content = serde_json::to_string_pretty(&StoredToken {
            token: token.clone(),
        })
        .context("serialize token failed")?;
        self.atomic_write(&content).await
    }

    async fn get(&self) -> Result<Option<AuthToken>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("read token file failed: {}", self.path.display())
                })
            }
        };
        let stored: StoredToken = serde_json::from_str(&content)
            .with_context(|| format!("parse token file failed: {}", self.path.display()))?;
        Ok(Some(stored.token))
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("remove token file failed: {}", self.path.display())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("auth").join("token.json"))
    }

    #[tokio::test]
    async fn get_on_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saved_token_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");

        FileTokenStore::new(&path)
            .save(&AuthToken::new("X"))
            .await
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get().await.unwrap(), Some(AuthToken::new("X")));
    }

    #[tokio::test]
    async fn clear_removes_the_token_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&AuthToken::new("X")).await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn save_replaces_the_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&AuthToken::new("old")).await.unwrap();
        store.save(&AuthToken::new("new")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(AuthToken::new("new")));
    }
}
