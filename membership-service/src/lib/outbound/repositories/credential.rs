use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::membership::errors::MembershipError;
use crate::membership::models::AccountAttributes;
use crate::membership::models::CredentialRecord;
use crate::membership::models::MembershipUser;
use crate::membership::ports::CredentialRepository;

/// Credential store held in process memory, keyed by exact username.
///
/// State updates for unknown users are no-ops and reads report defaults.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    records: DashMap<String, CredentialRecord>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn get_hashed_password_for_user(
        &self,
        username: &str,
    ) -> Result<Option<String>, MembershipError> {
        Ok(self
            .records
            .get(username)
            .map(|record| record.password_hash.clone()))
    }

    async fn change_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, MembershipError> {
        match self.records.get_mut(username) {
            Some(mut record) => {
                record.set_password_hash(password_hash.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password_success_state(&self, username: &str) -> Result<(), MembershipError> {
        if let Some(mut record) = self.records.get_mut(username) {
            record.record_success();
        }
        Ok(())
    }

    async fn update_password_failure_state(&self, username: &str) -> Result<(), MembershipError> {
        if let Some(mut record) = self.records.get_mut(username) {
            record.record_failure(Utc::now());
        }
        Ok(())
    }

    async fn create_user_and_account(
        &self,
        username: &str,
        password_hash: &str,
        require_confirmation: bool,
        attributes: AccountAttributes,
    ) -> Result<Option<String>, MembershipError> {
        match self.records.entry(username.to_string()) {
            Entry::Occupied(_) => Err(MembershipError::UsernameAlreadyExists(
                username.to_string(),
            )),
            Entry::Vacant(entry) => {
                let record = CredentialRecord::new(
                    username.to_string(),
                    password_hash.to_string(),
                    require_confirmation,
                    attributes,
                );
                let token = record.confirmation_token.clone();
                entry.insert(record);
                Ok(token)
            }
        }
    }

    async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError> {
        let pending = self
            .records
            .iter_mut()
            .find(|record| record.has_pending_token(token));

        match pending {
            Some(mut record) => {
                record.confirm();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn confirm_account_for_user(
        &self,
        username: &str,
        token: &str,
    ) -> Result<bool, MembershipError> {
        match self.records.get_mut(username) {
            Some(mut record) if record.has_pending_token(token) => {
                record.confirm();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError> {
        Ok(self
            .records
            .get(username)
            .map_or(false, |record| record.is_confirmed))
    }

    async fn get_last_password_failure_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        Ok(self
            .records
            .get(username)
            .and_then(|record| record.last_password_failure_at))
    }

    async fn get_password_changed_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        Ok(self
            .records
            .get(username)
            .map(|record| record.password_changed_at))
    }

    async fn get_password_failures_since_last_success(
        &self,
        username: &str,
    ) -> Result<u32, MembershipError> {
        Ok(self
            .records
            .get(username)
            .map_or(0, |record| record.password_failures_since_last_success))
    }

    async fn find_user(
        &self,
        provider_name: &str,
        username: &str,
        user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError> {
        Ok(self.records.get_mut(username).map(|mut record| {
            if user_is_online {
                record.record_activity(Utc::now());
            }
            MembershipUser::from_record(provider_name, &record)
        }))
    }
}
