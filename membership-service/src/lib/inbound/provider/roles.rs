use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::domain::principal::Identity;
use crate::domain::principal::Principal;
use crate::roles::errors::RoleError;
use crate::roles::ports::RoleServicePort;

/// Legacy role-provider surface over a [`RoleServicePort`].
pub struct RoleProvider<S>
where
    S: RoleServicePort,
{
    service: Arc<S>,
    application_name: String,
}

fn not_supported<T>(member: &'static str) -> Result<T, RoleError> {
    tracing::debug!(member, "Unsupported role member invoked");
    Err(RoleError::NotSupported(member))
}

impl<S> RoleProvider<S>
where
    S: RoleServicePort,
{
    pub fn new(service: Arc<S>, config: &ProviderConfig) -> Self {
        Self {
            service,
            application_name: config.application_name.clone(),
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub async fn get_roles_for_user(&self, username: &str) -> Result<Vec<String>, RoleError> {
        self.service.get_roles_for_user(username).await
    }

    pub async fn get_all_roles(&self) -> Result<Vec<String>, RoleError> {
        self.service.get_all_roles().await
    }

    pub async fn find_users_in_role(
        &self,
        role_name: &str,
        username_to_match: &str,
    ) -> Result<Vec<String>, RoleError> {
        self.service
            .find_users_in_role(role_name, username_to_match)
            .await
    }

    pub async fn role_exists(&self, role_name: &str) -> Result<bool, RoleError> {
        self.service.role_exists(role_name).await
    }

    pub async fn delete_role(
        &self,
        role_name: &str,
        throw_on_populated_role: bool,
    ) -> Result<bool, RoleError> {
        self.service
            .delete_role(role_name, throw_on_populated_role)
            .await
    }

    /// Build an authenticated principal carrying the user's current roles.
    ///
    /// # Errors
    /// * `InvalidArgument` - Username is empty
    /// * `Principal` - User has no roles
    /// * `DatabaseError` - Repository operation failed
    pub async fn create_principal(
        &self,
        username: &str,
        authentication_type: &str,
    ) -> Result<Principal, RoleError> {
        if username.is_empty() {
            return Err(RoleError::InvalidArgument("username"));
        }

        let roles = self.service.get_roles_for_user(username).await?;
        let identity = Identity::new(username, true, authentication_type, roles)?;

        Ok(Principal::new(identity))
    }

    pub fn create_role(&self, _role_name: &str) -> Result<(), RoleError> {
        not_supported("create_role")
    }

    pub fn add_users_to_roles(
        &self,
        _usernames: &[&str],
        _role_names: &[&str],
    ) -> Result<(), RoleError> {
        not_supported("add_users_to_roles")
    }

    pub fn remove_users_from_roles(
        &self,
        _usernames: &[&str],
        _role_names: &[&str],
    ) -> Result<(), RoleError> {
        not_supported("remove_users_from_roles")
    }

    pub fn get_users_in_role(&self, _role_name: &str) -> Result<Vec<String>, RoleError> {
        not_supported("get_users_in_role")
    }

    pub fn is_user_in_role(&self, _username: &str, _role_name: &str) -> Result<bool, RoleError> {
        not_supported("is_user_in_role")
    }
}
