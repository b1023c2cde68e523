//! JSON file session store
//!
//! The whole session is one JSON object on disk. Writes go to a sibling
//! temp file first and are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SessionStore;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Session store persisted to a JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store at `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, ApplicationError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(ApplicationError::Internal(format!(
                    "Failed to read session file {}: {e}",
                    self.path.display()
                )));
            },
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => {
                warn!(path = %self.path.display(), "Session file is corrupt, starting empty");
                Ok(Map::new())
            },
        }
    }

    async fn write_all(&self, entries: &Map<String, Value>) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::Internal(format!("Failed to create session directory: {e}"))
            })?;
        }

        let body = serde_json::to_vec_pretty(entries)
            .map_err(|e| ApplicationError::Internal(format!("Session serialization error: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, body).await.map_err(|e| {
            ApplicationError::Internal(format!("Failed to write session file: {e}"))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            ApplicationError::Internal(format!("Failed to replace session file: {e}"))
        })
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ApplicationError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        Ok(entries.remove(key))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: Value) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries).await?;
        debug!("Session entry stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<(), ApplicationError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Session file removed");
                Ok(())
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Internal(format!(
                "Failed to remove session file: {e}"
            ))),
        }
    }
}
