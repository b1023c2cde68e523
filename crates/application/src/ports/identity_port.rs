//! Identity provider port
//!
//! The third-party identity provider is an opaque capability; only the
//! four operations the front end uses are modelled.

use async_trait::async_trait;
use domain::UserProfile;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the external identity provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Create an account and sign it in
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<UserProfile, ApplicationError>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, ApplicationError>;

    /// Sign the current user out
    async fn sign_out(&self) -> Result<(), ApplicationError>;

    /// The currently signed-in user, if any
    async fn current_user(&self) -> Result<Option<UserProfile>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn IdentityPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn IdentityPort>();
    }
}
