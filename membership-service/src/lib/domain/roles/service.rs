use std::sync::Arc;

use async_trait::async_trait;

use crate::roles::errors::RoleError;
use crate::roles::ports::RoleRepository;
use crate::roles::ports::RoleServicePort;

/// Domain service implementation for role lookups.
///
/// Every operation is a straight delegation to the repository.
pub struct RoleService<RR>
where
    RR: RoleRepository,
{
    repository: Arc<RR>,
}

impl<RR> RoleService<RR>
where
    RR: RoleRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }

    pub fn builder() -> RoleServiceBuilder<RR> {
        RoleServiceBuilder::default()
    }

    /// Build from an optional repository.
    ///
    /// # Errors
    /// * `Configuration` - No repository was supplied
    pub fn try_new(repository: Option<Arc<RR>>) -> Result<Self, RoleError> {
        repository
            .map(Self::new)
            .ok_or_else(|| RoleError::Configuration("role repository is not set".to_string()))
    }
}

/// Collects the repository and rejects incomplete wiring in [`build`](Self::build).
pub struct RoleServiceBuilder<RR> {
    repository: Option<Arc<RR>>,
}

impl<RR> Default for RoleServiceBuilder<RR> {
    fn default() -> Self {
        Self { repository: None }
    }
}

impl<RR> RoleServiceBuilder<RR>
where
    RR: RoleRepository,
{
    pub fn repository(mut self, repository: Arc<RR>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Finish construction.
    ///
    /// # Errors
    /// * `Configuration` - No repository was supplied
    pub fn build(self) -> Result<RoleService<RR>, RoleError> {
        RoleService::try_new(self.repository)
    }
}

#[async_trait]
impl<RR> RoleServicePort for RoleService<RR>
where
    RR: RoleRepository,
{
    async fn get_roles_for_user(&self, username: &str) -> Result<Vec<String>, RoleError> {
        self.repository.get_roles_for_user(username).await
    }

    async fn get_all_roles(&self) -> Result<Vec<String>, RoleError> {
        self.repository.get_all_roles().await
    }

    async fn find_users_in_role(
        &self,
        role_name: &str,
        username_filter: &str,
    ) -> Result<Vec<String>, RoleError> {
        self.repository
            .find_users_in_role(role_name, username_filter)
            .await
    }

    async fn role_exists(&self, role_name: &str) -> Result<bool, RoleError> {
        self.repository.role_exists(role_name).await
    }

    async fn delete_role(
        &self,
        role_name: &str,
        throw_on_populated: bool,
    ) -> Result<bool, RoleError> {
        let deleted = self
            .repository
            .delete_role(role_name, throw_on_populated)
            .await?;

        tracing::info!(role = %role_name, deleted, "Role delete processed");

        Ok(deleted)
    }
}
