use thiserror::Error;

/// Error for identity construction failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrincipalError {
    #[error("Identity must have at least one role")]
    EmptyRoles,
}

/// Authenticated identity together with the roles resolved for it.
///
/// Immutable once built; roles are only handed out as a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    is_authenticated: bool,
    authentication_type: String,
    roles: Vec<String>,
}

impl Identity {
    /// Create an identity.
    ///
    /// # Errors
    /// * `EmptyRoles` - `roles` is empty
    pub fn new(
        name: impl Into<String>,
        is_authenticated: bool,
        authentication_type: impl Into<String>,
        roles: Vec<String>,
    ) -> Result<Self, PrincipalError> {
        if roles.is_empty() {
            return Err(PrincipalError::EmptyRoles);
        }

        Ok(Self {
            name: name.into(),
            is_authenticated,
            authentication_type: authentication_type.into(),
            roles,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn authentication_type(&self) -> &str {
        &self.authentication_type
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Security principal wrapping an [`Identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    identity: Identity,
}

impl Principal {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Exact, case-sensitive role match.
    pub fn is_in_role(&self, role: &str) -> bool {
        self.identity.roles.iter().any(|r| r == role)
    }
}
