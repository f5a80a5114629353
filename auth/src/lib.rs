//! Session credential infrastructure
//!
//! Provides the security primitives the account service builds on:
//! - Password hashing (Argon2id)
//! - Signed session claims (JWT, HS256)
//! - Access/refresh token pair issuance and validation
//!
//! The service keeps its own domain traits and adapts these implementations,
//! so this crate stays free of storage or transport concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Issuance and Validation
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 5, 24);
//!
//! // Login: mint an access/refresh pair for a verified identity
//! let tokens = auth.issue_session("account-id", "alice").unwrap();
//!
//! // Gate: validate the access token on subsequent requests
//! let claims = auth.validate_access(&tokens.access).unwrap();
//! assert_eq!(claims.sub, "account-id");
//!
//! // Later: trade the refresh token for a new access token
//! let access = auth.refresh_access(&tokens.refresh).unwrap();
//! assert!(!access.is_empty());
//! ```

pub mod authenticator;
pub mod claims;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::SessionTokens;
pub use claims::SessionClaims;
pub use claims::TokenUse;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
