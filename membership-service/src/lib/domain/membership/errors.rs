use thiserror::Error;

/// Error for password port operations
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Top-level error for all membership operations
#[derive(Debug, Clone, Error)]
pub enum MembershipError {
    /// A required collaborator was not supplied before the service was built.
    #[error("Membership provider is misconfigured: {0}")]
    Configuration(String),

    #[error("Argument must not be empty: {0}")]
    InvalidArgument(&'static str),

    /// The member exists for framework compatibility but this backend has no implementation.
    #[error("Not supported by this membership backend: {0}")]
    NotSupported(&'static str),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
