//! Access token storage.
//!
//! The token issued at sign-in is the only credential the client keeps.
//! [`TokenStore`] is the seam for wherever it lives: memory for tests and
//! short-lived tools, a file for anything that should survive a restart.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use bedbet_core::errors::{BetError, BetResult};
use mockall::automock;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

#[automock]
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self) -> BetResult<Option<String>>;

    async fn set(&self, token: &str) -> BetResult<()>;

    async fn clear(&self) -> BetResult<()>;
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> BetResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> BetResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> BetResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// Keeps the token as the sole content of a file.
///
/// A missing or blank file means no token. On unix the file is readable by
/// its owner only.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn storage_error(action: &str, err: std::io::Error) -> BetError {
    BetError::Storage(format!("Failed to {} token: {}", action, err))
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> BetResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", e)),
        }
    }

    async fn set(&self, token: &str) -> BetResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| storage_error("store", e))?;
            }
        }

        // staged next to the target, then renamed over it
        let staging = self.staging_path();
        match tokio::fs::remove_file(&staging).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(storage_error("store", e)),
        }

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options
            .open(&staging)
            .await
            .map_err(|e| storage_error("store", e))?;
        file.write_all(token.as_bytes())
            .await
            .map_err(|e| storage_error("store", e))?;
        file.sync_all()
            .await
            .map_err(|e| storage_error("store", e))?;
        drop(file);

        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| storage_error("store", e))
    }

    async fn clear(&self) -> BetResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("delete", e)),
        }
    }
}
