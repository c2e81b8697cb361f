//! Authentication utilities library
//!
//! - Password hashing (Argon2id)
//! - Bearer token issuance and verification (HS256 JWT)
//! - An `Authenticator` tying the two together for login flows
//!
//! Services keep their own identity lookup and error taxonomy and call into
//! this crate only for the cryptographic parts.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::days(7));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token for the account email
//! let issued = auth.authenticate("password123", &hash, "ana@example.com").unwrap();
//!
//! // Later requests: verify the bearer token
//! let claims = auth.verify_token(&issued.access_token).unwrap();
//! assert_eq!(claims.subject(), Some("ana@example.com"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
