use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Identity;
use crate::domain::auth::models::Session;

/// Port for credential exchange and bearer token resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange email and password for a signed token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Token` - Token could not be signed
    /// * `User` - Credential store lookup failed
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// Resolve a bearer token to the identity it was issued for.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is invalid or expired, or its user no longer exists
    /// * `User` - Credential store lookup failed
    async fn authorize(&self, token: &str) -> Result<Identity, AuthError>;
}
