use thiserror::Error;

use crate::domain::principal::PrincipalError;

/// Top-level error for all role operations
#[derive(Debug, Clone, Error)]
pub enum RoleError {
    #[error("Role provider is misconfigured: {0}")]
    Configuration(String),

    #[error("Argument must not be empty: {0}")]
    InvalidArgument(&'static str),

    #[error("Not supported by this role backend: {0}")]
    NotSupported(&'static str),

    #[error("Cannot build principal: {0}")]
    Principal(#[from] PrincipalError),

    #[error("Role still has members: {0}")]
    RolePopulated(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
