use async_trait::async_trait;

use crate::roles::errors::RoleError;

/// Port for role query operations.
#[async_trait]
pub trait RoleServicePort: Send + Sync + 'static {
    /// Roles the user belongs to, in repository order.
    ///
    /// # Errors
    /// * `DatabaseError` - Repository operation failed
    async fn get_roles_for_user(&self, username: &str) -> Result<Vec<String>, RoleError>;

    /// Every role known to the repository.
    async fn get_all_roles(&self) -> Result<Vec<String>, RoleError>;

    /// Members of `role_name` whose username matches `username_filter`.
    ///
    /// Matching rules belong to the repository.
    async fn find_users_in_role(
        &self,
        role_name: &str,
        username_filter: &str,
    ) -> Result<Vec<String>, RoleError>;

    async fn role_exists(&self, role_name: &str) -> Result<bool, RoleError>;

    /// Remove a role.
    ///
    /// # Returns
    /// True if the role existed and was removed
    ///
    /// # Errors
    /// * `RolePopulated` - Role has members and `throw_on_populated` was set
    /// * `DatabaseError` - Repository operation failed
    async fn delete_role(&self, role_name: &str, throw_on_populated: bool)
        -> Result<bool, RoleError>;
}

/// Persistence operations for role membership.
#[async_trait]
pub trait RoleRepository: Send + Sync + 'static {
    async fn get_roles_for_user(&self, username: &str) -> Result<Vec<String>, RoleError>;

    async fn get_all_roles(&self) -> Result<Vec<String>, RoleError>;

    async fn find_users_in_role(
        &self,
        role_name: &str,
        username_filter: &str,
    ) -> Result<Vec<String>, RoleError>;

    async fn role_exists(&self, role_name: &str) -> Result<bool, RoleError>;

    async fn delete_role(&self, role_name: &str, throw_on_populated: bool)
        -> Result<bool, RoleError>;
}
