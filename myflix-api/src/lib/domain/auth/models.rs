use std::fmt;

use auth::IssuedToken;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Raw login input. The email is not validated; a malformed
/// address simply never matches a stored user.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticated caller, attached to the request by the bearer middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: String,
}

impl Identity {
    pub fn of(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: IssuedToken,
}
