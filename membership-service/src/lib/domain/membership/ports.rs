use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::membership::errors::MembershipError;
use crate::membership::errors::PasswordError;
use crate::membership::models::AccountAttributes;
use crate::membership::models::MembershipUser;

/// Port for membership domain service operations.
#[async_trait]
pub trait MembershipServicePort: Send + Sync + 'static {
    /// Check a username/password pair and record the outcome.
    ///
    /// # Arguments
    /// * `username` - Account name
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// True if the password matches the stored hash. Unknown users yield false.
    ///
    /// # Errors
    /// * `Password` - Hashing backend failed
    /// * `DatabaseError` - Repository operation failed
    async fn validate_user(&self, username: &str, password: &str) -> Result<bool, MembershipError>;

    /// Replace a password after re-verifying the current one.
    ///
    /// # Returns
    /// True if the old password matched and the repository stored the new hash
    ///
    /// # Errors
    /// * `InvalidArgument` - Any argument is empty
    /// * `Password` - Hashing backend failed
    /// * `DatabaseError` - Repository operation failed
    async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, MembershipError>;

    /// Create a user profile and membership account.
    ///
    /// # Arguments
    /// * `username` - Account name
    /// * `password` - Plaintext password (hashed before it reaches the repository)
    /// * `require_confirmation` - Issue a confirmation token and leave the account pending
    /// * `attributes` - Extra profile values, empty when `None`
    ///
    /// # Returns
    /// Token yielded by the repository, normally the confirmation token
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing backend failed
    /// * `DatabaseError` - Repository operation failed
    async fn create_user_and_account(
        &self,
        username: &str,
        password: &str,
        require_confirmation: bool,
        attributes: Option<AccountAttributes>,
    ) -> Result<Option<String>, MembershipError>;

    /// Activate the pending account that owns `token`.
    ///
    /// # Errors
    /// * `InvalidArgument` - Token is empty
    /// * `DatabaseError` - Repository operation failed
    async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError>;

    /// Activate the pending account of `username` if `token` matches.
    ///
    /// # Errors
    /// * `InvalidArgument` - Username or token is empty
    /// * `DatabaseError` - Repository operation failed
    async fn confirm_account_for_user(
        &self,
        username: &str,
        token: &str,
    ) -> Result<bool, MembershipError>;

    async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError>;

    async fn get_last_password_failure_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError>;

    async fn get_password_changed_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError>;

    async fn get_password_failures_since_last_success(
        &self,
        username: &str,
    ) -> Result<u32, MembershipError>;

    /// Look up an account snapshot.
    ///
    /// # Returns
    /// `None` when `username` is empty (nobody signed in) or unknown
    ///
    /// # Errors
    /// * `DatabaseError` - Repository operation failed
    async fn get_user(
        &self,
        username: &str,
        user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError>;

    fn min_required_password_length(&self) -> usize;

    fn min_required_non_alphanumeric_characters(&self) -> usize;

    fn password_strength_regular_expression(&self) -> String;
}

/// Persistence operations for credential records.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve the stored hash for a user.
    ///
    /// # Returns
    /// Optional hash (None, or an empty string, if the user is unknown)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_hashed_password_for_user(
        &self,
        username: &str,
    ) -> Result<Option<String>, MembershipError>;

    /// Store a new password hash.
    ///
    /// # Returns
    /// True if a record was updated
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn change_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, MembershipError>;

    /// Reset the failure counter after a successful validation.
    async fn update_password_success_state(&self, username: &str) -> Result<(), MembershipError>;

    /// Increment the failure counter and stamp the failure time after a failed validation.
    async fn update_password_failure_state(&self, username: &str) -> Result<(), MembershipError>;

    /// Persist a new user and account.
    ///
    /// # Arguments
    /// * `username` - Account name
    /// * `password_hash` - Already hashed password
    /// * `require_confirmation` - Leave the account pending confirmation
    /// * `attributes` - Profile values, including the confirmation token when required
    ///
    /// # Returns
    /// Token to hand back to the caller, if any
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_user_and_account(
        &self,
        username: &str,
        password_hash: &str,
        require_confirmation: bool,
        attributes: AccountAttributes,
    ) -> Result<Option<String>, MembershipError>;

    /// Match and consume a confirmation token.
    async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError>;

    /// Match and consume a confirmation token belonging to `username`.
    async fn confirm_account_for_user(
        &self,
        username: &str,
        token: &str,
    ) -> Result<bool, MembershipError>;

    async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError>;

    async fn get_last_password_failure_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError>;

    async fn get_password_changed_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError>;

    async fn get_password_failures_since_last_success(
        &self,
        username: &str,
    ) -> Result<u32, MembershipError>;

    /// Retrieve an account snapshot labelled with `provider_name`.
    ///
    /// When `user_is_online` is set the account's last activity time is refreshed first.
    async fn find_user(
        &self,
        provider_name: &str,
        username: &str,
        user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError>;
}

/// Salted password hashing and confirmation token issuance.
pub trait PasswordService: Send + Sync + 'static {
    /// Hash a plaintext password; the salt is embedded in the output.
    fn create_hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash could not be parsed
    fn validate_password(&self, password: &str, password_hash: &str)
        -> Result<bool, PasswordError>;

    /// Produce a fresh opaque confirmation token.
    fn create_confirmation_token(&self) -> String;

    fn min_required_password_length(&self) -> usize;

    fn min_required_non_alphanumeric_characters(&self) -> usize;

    fn password_strength_regular_expression(&self) -> String;
}
