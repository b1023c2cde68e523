//! Client-side session store port
//!
//! Replaces ambient browser storage with an injected key/value capability.
//! Values are JSON documents; callers handle (de)serialization.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::error::ApplicationError;

/// Key under which the signed-in user's profile is stored
pub const USER_KEY: &str = "user";

/// Port for session-scoped key/value storage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Get a stored value by key
    async fn get(&self, key: &str) -> Result<Option<Value>, ApplicationError>;

    /// Store a value, replacing any previous one
    async fn set(&self, key: &str, value: Value) -> Result<(), ApplicationError>;

    /// Remove every stored value
    async fn clear(&self) -> Result<(), ApplicationError>;
}
