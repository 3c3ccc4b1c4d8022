//! Compatibility shim for hosts that expect the full legacy membership and
//! role provider contracts.

use crate::membership::models::MembershipUser;

pub mod membership;
pub mod roles;

pub use membership::MembershipProvider;
pub use roles::RoleProvider;

/// Zero-based page request for user enumeration members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserPage {
    pub users: Vec<MembershipUser>,
    pub total_records: usize,
}

/// External login linked to a local account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthAccount {
    pub provider: String,
    pub provider_user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordFormat {
    Clear,
    Hashed,
    Encrypted,
}
