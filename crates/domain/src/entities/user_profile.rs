//! Signed-in user profile
//!
//! The identity provider's view of a user, as cached in the session store.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// User profile as returned by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Identity-provider user id
    uid: String,
    /// Sign-in email address
    email: String,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl UserProfile {
    /// Create a new user profile
    ///
    /// # Errors
    ///
    /// Returns a validation error if `uid` is empty or `email` has no `@`.
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let uid = uid.into();
        let email = email.into();

        if uid.trim().is_empty() {
            return Err(DomainError::ValidationError("uid is required".to_string()));
        }
        if !email.contains('@') {
            return Err(DomainError::ValidationError(format!(
                "invalid email address: {email}"
            )));
        }

        Ok(Self {
            uid,
            email,
            display_name: None,
        })
    }

    /// Set the display name
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Get the user id
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Get the email address
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the display name
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Name to greet the user with: display name, else the email's local part
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or(&self.email))
    }
}
