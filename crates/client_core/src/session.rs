use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{api::UserAccount, domain::Role};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read credentials from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write credentials to {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to remove credentials at {path:?}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("persisted credentials are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted login triple. This is the client-storage analog of the
/// original application's `token` / `userRole` / `user` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub token: String,
    pub user_role: Role,
    pub user: UserAccount,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Result<Option<Credentials>, StoreError>;
    async fn save(&self, credentials: &Credentials) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// Keeps credentials for the lifetime of the process only. Used by tests and
/// by embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<Credentials>>,
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>, StoreError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, credentials: &Credentials) -> Result<(), StoreError> {
        *self.slot.lock().await = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

/// Persists credentials as a small JSON file so a login survives process
/// restarts, the way the browser client survived page reloads.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<Credentials>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };
        let credentials = serde_json::from_slice(&raw)?;
        Ok(Some(credentials))
    }

    async fn save(&self, credentials: &Credentials) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Write {
                        path: self.path.clone(),
                        source,
                    })?;
            }
        }
        let raw = serde_json::to_vec_pretty(credentials)?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Remove {
                path: self.path.clone(),
                source: err,
            }),
        }
    }
}
