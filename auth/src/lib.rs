//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the blog service:
//! - Password hashing (Argon2id)
//! - Session token generation and validation (JWT)
//! - Authentication coordination
//!
//! Tokens are stateless: validity is a function of signature and expiry alone,
//! recomputed on every request. There is no revocation mechanism — a leaked
//! token stays valid until it expires naturally.
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
//! ## Session Tokens
//! ```
//! use auth::JwtHandler;
//! use chrono::Utc;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", 24);
//! let now = Utc::now();
//! let token = handler.issue(42, now).unwrap();
//! assert_eq!(handler.validate(&token, now).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Utc;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let token = auth.authenticate("password123", &hash, 42, Utc::now()).unwrap();
//!
//! // Validate token on subsequent requests
//! let user_id = auth.validate_token(&token, Utc::now()).unwrap();
//! assert_eq!(user_id, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
