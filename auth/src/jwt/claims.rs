use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// `sub` carries the identity the token was issued to. Services decide what
/// the identity is (the catalog API uses the account email).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (identity the token was issued to)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims for a freshly authenticated identity.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued to
    /// * `ttl` - Lifetime of the token, counted from now
    ///
    /// # Returns
    /// Claims with `sub`, `iat` and `exp` set
    pub fn for_identity(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: Some((now + ttl).timestamp()),
            iat: Some(now.timestamp()),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}
