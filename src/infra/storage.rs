use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::AppConfig;

/// String key/value store persisted as one JSON object on disk. Mirrors the
/// browser local-storage contract: get, set and remove by key.
#[derive(Clone)]
pub struct LocalStorage {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(config: &AppConfig) -> Self {
        Self::at(&config.storage_path)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: Arc::new(path.as_ref().to_path_buf()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    /// Fails when the file is unreadable or does not parse.
    pub async fn ping(&self) -> Result<()> {
        match self.read().await? {
            Some(bytes) => serde_json::from_slice::<BTreeMap<String, String>>(&bytes)
                .map(|_| ())
                .with_context(|| format!("corrupt storage file {}", self.path.display())),
            None => Ok(()),
        }
    }

    /// A file that does not parse reads as empty, so the next write replaces it.
    async fn load(&self) -> Result<BTreeMap<String, String>> {
        let Some(bytes) = self.read().await? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt storage file");
                Ok(BTreeMap::new())
            }
        }
    }

    async fn read(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", self.path.display())),
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp, bytes)
            .await
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, self.path.as_ref()).await?;
        Ok(())
    }
}
