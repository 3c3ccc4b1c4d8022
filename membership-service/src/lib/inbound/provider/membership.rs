use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use super::OAuthAccount;
use super::Page;
use super::PasswordFormat;
use super::UserPage;
use crate::config::ProviderConfig;
use crate::membership::errors::MembershipError;
use crate::membership::models::AccountAttributes;
use crate::membership::models::MembershipUser;
use crate::membership::ports::MembershipServicePort;

/// Legacy membership-provider surface over a [`MembershipServicePort`].
///
/// Members with a backing implementation delegate to the service. The rest
/// fail with `NotSupported` regardless of arguments.
pub struct MembershipProvider<S>
where
    S: MembershipServicePort,
{
    service: Arc<S>,
    application_name: String,
}

fn not_supported<T>(member: &'static str) -> Result<T, MembershipError> {
    tracing::debug!(member, "Unsupported membership member invoked");
    Err(MembershipError::NotSupported(member))
}

impl<S> MembershipProvider<S>
where
    S: MembershipServicePort,
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

    pub fn enable_password_reset(&self) -> bool {
        true
    }

    pub fn enable_password_retrieval(&self) -> bool {
        false
    }

    pub async fn validate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, MembershipError> {
        self.service.validate_user(username, password).await
    }

    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, MembershipError> {
        self.service
            .change_password(username, old_password, new_password)
            .await
    }

    pub async fn create_user_and_account(
        &self,
        username: &str,
        password: &str,
        require_confirmation: bool,
        attributes: Option<AccountAttributes>,
    ) -> Result<Option<String>, MembershipError> {
        self.service
            .create_user_and_account(username, password, require_confirmation, attributes)
            .await
    }

    pub async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError> {
        self.service.confirm_account(token).await
    }

    pub async fn confirm_account_for_user(
        &self,
        username: &str,
        token: &str,
    ) -> Result<bool, MembershipError> {
        self.service.confirm_account_for_user(username, token).await
    }

    pub async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError> {
        self.service.is_confirmed(username).await
    }

    pub async fn get_last_password_failure_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        self.service.get_last_password_failure_date(username).await
    }

    pub async fn get_password_changed_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        self.service.get_password_changed_date(username).await
    }

    pub async fn get_password_failures_since_last_success(
        &self,
        username: &str,
    ) -> Result<u32, MembershipError> {
        self.service
            .get_password_failures_since_last_success(username)
            .await
    }

    /// Look up a user. `user_is_online` refreshes the stored last activity time.
    pub async fn get_user(
        &self,
        username: &str,
        user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError> {
        self.service.get_user(username, user_is_online).await
    }

    pub fn min_required_password_length(&self) -> usize {
        self.service.min_required_password_length()
    }

    pub fn min_required_non_alphanumeric_characters(&self) -> usize {
        self.service.min_required_non_alphanumeric_characters()
    }

    pub fn password_strength_regular_expression(&self) -> String {
        self.service.password_strength_regular_expression()
    }

    pub fn change_password_question_and_answer(
        &self,
        _username: &str,
        _password: &str,
        _new_question: &str,
        _new_answer: &str,
    ) -> Result<bool, MembershipError> {
        not_supported("change_password_question_and_answer")
    }

    pub fn create_account(
        &self,
        _username: &str,
        _password: &str,
        _require_confirmation_token: bool,
    ) -> Result<String, MembershipError> {
        not_supported("create_account")
    }

    pub fn create_user(
        &self,
        _username: &str,
        _password: &str,
        _email: &str,
    ) -> Result<MembershipUser, MembershipError> {
        not_supported("create_user")
    }

    pub fn delete_account(&self, _username: &str) -> Result<bool, MembershipError> {
        not_supported("delete_account")
    }

    pub fn delete_user(
        &self,
        _username: &str,
        _delete_all_related_data: bool,
    ) -> Result<bool, MembershipError> {
        not_supported("delete_user")
    }

    pub fn generate_password_reset_token(
        &self,
        _username: &str,
        _expiration_minutes: u32,
    ) -> Result<String, MembershipError> {
        not_supported("generate_password_reset_token")
    }

    pub fn get_accounts_for_user(
        &self,
        _username: &str,
    ) -> Result<Vec<OAuthAccount>, MembershipError> {
        not_supported("get_accounts_for_user")
    }

    pub fn get_create_date(&self, _username: &str) -> Result<DateTime<Utc>, MembershipError> {
        not_supported("get_create_date")
    }

    pub fn get_user_id_from_password_reset_token(
        &self,
        _token: &str,
    ) -> Result<i64, MembershipError> {
        not_supported("get_user_id_from_password_reset_token")
    }

    pub fn reset_password_with_token(
        &self,
        _token: &str,
        _new_password: &str,
    ) -> Result<bool, MembershipError> {
        not_supported("reset_password_with_token")
    }

    pub fn find_users_by_email(
        &self,
        _email_to_match: &str,
        _page: Page,
    ) -> Result<UserPage, MembershipError> {
        not_supported("find_users_by_email")
    }

    pub fn find_users_by_name(
        &self,
        _username_to_match: &str,
        _page: Page,
    ) -> Result<UserPage, MembershipError> {
        not_supported("find_users_by_name")
    }

    pub fn get_all_users(&self, _page: Page) -> Result<UserPage, MembershipError> {
        not_supported("get_all_users")
    }

    pub fn get_number_of_users_online(&self) -> Result<usize, MembershipError> {
        not_supported("get_number_of_users_online")
    }

    pub fn get_password(&self, _username: &str, _answer: &str) -> Result<String, MembershipError> {
        not_supported("get_password")
    }

    pub fn get_user_by_key(
        &self,
        _provider_user_key: &str,
        _user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError> {
        not_supported("get_user_by_key")
    }

    pub fn get_user_name_by_email(&self, _email: &str) -> Result<Option<String>, MembershipError> {
        not_supported("get_user_name_by_email")
    }

    pub fn max_invalid_password_attempts(&self) -> Result<u32, MembershipError> {
        not_supported("max_invalid_password_attempts")
    }

    pub fn password_attempt_window(&self) -> Result<u32, MembershipError> {
        not_supported("password_attempt_window")
    }

    pub fn password_format(&self) -> Result<PasswordFormat, MembershipError> {
        not_supported("password_format")
    }

    pub fn requires_question_and_answer(&self) -> Result<bool, MembershipError> {
        not_supported("requires_question_and_answer")
    }

    pub fn requires_unique_email(&self) -> Result<bool, MembershipError> {
        not_supported("requires_unique_email")
    }

    pub fn reset_password(
        &self,
        _username: &str,
        _answer: &str,
    ) -> Result<String, MembershipError> {
        not_supported("reset_password")
    }

    pub fn unlock_user(&self, _username: &str) -> Result<bool, MembershipError> {
        not_supported("unlock_user")
    }

    pub fn update_user(&self, _user: &MembershipUser) -> Result<(), MembershipError> {
        not_supported("update_user")
    }
}
