//! Identity adapter used when no identity provider is configured
//!
//! There is no remote session: signing in or up fails with a configuration
//! error, signing out always succeeds and nobody is signed in remotely. A
//! profile already in the session store is still served by
//! `SessionService`.

use async_trait::async_trait;
use domain::UserProfile;
use tracing::debug;

use application::ApplicationError;
use application::ports::IdentityPort;

const NOT_CONFIGURED: &str = "no identity provider configured";

/// Identity port without a backing provider
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineIdentity;

impl OfflineIdentity {
    /// Create the adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IdentityPort for OfflineIdentity {
    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _display_name: Option<String>,
    ) -> Result<UserProfile, ApplicationError> {
        Err(ApplicationError::Configuration(NOT_CONFIGURED.to_string()))
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<UserProfile, ApplicationError> {
        Err(ApplicationError::Configuration(NOT_CONFIGURED.to_string()))
    }

    async fn sign_out(&self) -> Result<(), ApplicationError> {
        debug!("No identity provider, nothing to sign out from");
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<UserProfile>, ApplicationError> {
        Ok(None)
    }
}
