//! Credential hashing utilities library
//!
//! Provides the primitives a membership backend needs around passwords:
//! - Password hashing and verification (Argon2id)
//! - Opaque account confirmation tokens
//! - Password policy parameters
//!
//! Services define their own password port and adapt these implementations.
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
//! ## Confirmation Tokens
//! ```
//! use auth::ConfirmationTokenGenerator;
//!
//! let generator = ConfirmationTokenGenerator::new();
//! assert_ne!(generator.generate(), generator.generate());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use token::ConfirmationTokenGenerator;
