use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Identity;
use crate::domain::auth::models::Session;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Authentication gate backed by the user store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let Some(user) = self.repository.find_by_email(&credentials.email).await? else {
            tracing::warn!(email = %credentials.email, "Login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        let token = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.password_hash,
                user.email.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(email = %user.email, "Login failed: wrong password");
                    AuthError::InvalidCredentials
                }
                AuthenticationError::PasswordError(e) => AuthError::Password(e.to_string()),
                AuthenticationError::JwtError(e) => AuthError::Token(e.to_string()),
            })?;

        tracing::info!(email = %user.email, expires_at = %token.expires_at, "User logged in");

        Ok(Session { user, token })
    }

    async fn authorize(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.authenticator.verify_token(token).map_err(|e| {
            tracing::warn!(error = %e, "Bearer token rejected");
            AuthError::Unauthenticated(e.to_string())
        })?;

        let subject = claims
            .subject()
            .ok_or_else(|| AuthError::Unauthenticated("token has no subject".to_string()))?;

        let user = self
            .repository
            .find_by_email(subject)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %subject, "Bearer token for deleted user");
                AuthError::Unauthenticated(format!("{} no longer exists", subject))
            })?;

        Ok(Identity::of(&user))
    }
}

/// Only the owner of an account may change it.
///
/// # Errors
/// * `PermissionDenied` - `identity` is not the user addressed by `email`
pub fn ensure_owner(identity: &Identity, email: &str) -> Result<(), AuthError> {
    if identity.email != email {
        tracing::warn!(caller = %identity.email, account = %email, "Permission denied");
        return Err(AuthError::PermissionDenied);
    }
    Ok(())
}
