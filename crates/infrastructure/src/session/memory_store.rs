//! In-memory session store

use std::collections::HashMap;

use application::error::ApplicationError;
use application::ports::SessionStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

/// Session store backed by a process-local map
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, ApplicationError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), ApplicationError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApplicationError> {
        self.entries.write().clear();
        Ok(())
    }
}
