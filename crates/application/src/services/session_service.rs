//! Session lifecycle service
//!
//! Ties the session store to the identity provider: signing in or up
//! stores the user's profile, signing out clears the store.

use std::fmt;
use std::sync::Arc;

use domain::UserProfile;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{IdentityPort, SessionStore, USER_KEY};

/// Manages the signed-in user and the session store that caches it
#[derive(Clone)]
pub struct SessionService {
    identity: Arc<dyn IdentityPort>,
    store: Arc<dyn SessionStore>,
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("identity", &"<dyn IdentityPort>")
            .field("store", &self.store)
            .finish()
    }
}

impl SessionService {
    /// Create a new session service
    pub fn new(identity: Arc<dyn IdentityPort>, store: Arc<dyn SessionStore>) -> Self {
        Self { identity, store }
    }

    /// Create an account and start a session for it
    #[instrument(skip(self, password))]
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<UserProfile, ApplicationError> {
        let profile = self.identity.sign_up(email, password, display_name).await?;
        self.remember(&profile).await?;
        info!(uid = %profile.uid(), "Signed up");
        Ok(profile)
    }

    /// Sign in and start a session
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, ApplicationError> {
        let profile = self.identity.sign_in(email, password).await?;
        self.remember(&profile).await?;
        info!(uid = %profile.uid(), "Signed in");
        Ok(profile)
    }

    /// Sign out and clear the session store
    ///
    /// The store is cleared even if the identity provider fails to sign out.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), ApplicationError> {
        let signed_out = self.identity.sign_out().await;
        self.store.clear().await?;

        if let Err(e) = &signed_out {
            warn!(error = %e, "Identity provider sign-out failed, session cleared anyway");
        } else {
            info!("Signed out");
        }
        signed_out
    }

    /// The signed-in user
    ///
    /// Served from the session store when present, otherwise fetched from the
    /// identity provider and stored.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<Option<UserProfile>, ApplicationError> {
        if let Some(value) = self.store.get(USER_KEY).await? {
            match serde_json::from_value::<UserProfile>(value) {
                Ok(profile) => return Ok(Some(profile)),
                Err(e) => warn!(error = %e, "Discarding unreadable stored profile"),
            }
        }

        debug!("No stored profile, asking identity provider");
        let profile = self.identity.current_user().await?;
        if let Some(ref profile) = profile {
            self.remember(profile).await?;
        }
        Ok(profile)
    }

    async fn remember(&self, profile: &UserProfile) -> Result<(), ApplicationError> {
        let value = serde_json::to_value(profile)
            .map_err(|e| ApplicationError::Internal(format!("Profile serialization error: {e}")))?;
        self.store.set(USER_KEY, value).await
    }
}
