//! Free-text location query value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-empty free-text place name as typed by the user
///
/// Surrounding whitespace is trimmed; nothing else is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a query from user input
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocation` if the text is empty or whitespace only.
    pub fn new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyLocation);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the query text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form, used as a cache key
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
