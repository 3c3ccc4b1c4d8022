use std::collections::BTreeSet;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::roles::errors::RoleError;
use crate::roles::ports::RoleRepository;

/// Role membership held in process memory.
///
/// Results are always sorted so repeated reads compare equal.
#[derive(Default)]
pub struct InMemoryRoleRepository {
    members: DashMap<String, BTreeSet<String>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty role. Existing roles keep their members.
    pub fn add_role(&self, role_name: &str) {
        self.members.entry(role_name.to_string()).or_default();
    }

    /// Add `username` to `role_name`, creating the role if needed.
    pub fn assign(&self, username: &str, role_name: &str) {
        self.members
            .entry(role_name.to_string())
            .or_default()
            .insert(username.to_string());
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn get_roles_for_user(&self, username: &str) -> Result<Vec<String>, RoleError> {
        let mut roles: Vec<String> = self
            .members
            .iter()
            .filter(|entry| entry.value().contains(username))
            .map(|entry| entry.key().clone())
            .collect();
        roles.sort();
        Ok(roles)
    }

    async fn get_all_roles(&self) -> Result<Vec<String>, RoleError> {
        let mut roles: Vec<String> = self.members.iter().map(|entry| entry.key().clone()).collect();
        roles.sort();
        Ok(roles)
    }

    /// Substring match on the username.
    async fn find_users_in_role(
        &self,
        role_name: &str,
        username_filter: &str,
    ) -> Result<Vec<String>, RoleError> {
        Ok(self
            .members
            .get(role_name)
            .map(|users| {
                users
                    .iter()
                    .filter(|username| username.contains(username_filter))
                    .cloned()
                    .collect::<Vec<String>>()
            })
            .unwrap_or_default())
    }

    async fn role_exists(&self, role_name: &str) -> Result<bool, RoleError> {
        Ok(self.members.contains_key(role_name))
    }

    async fn delete_role(
        &self,
        role_name: &str,
        throw_on_populated: bool,
    ) -> Result<bool, RoleError> {
        if self
            .members
            .remove_if(role_name, |_, users| !throw_on_populated || users.is_empty())
            .is_some()
        {
            return Ok(true);
        }

        if self.members.contains_key(role_name) {
            return Err(RoleError::RolePopulated(role_name.to_string()));
        }

        Ok(false)
    }
}
