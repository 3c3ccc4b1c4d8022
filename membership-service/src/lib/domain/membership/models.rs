use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;

/// Attribute key under which a pending account's confirmation token is handed to the repository.
pub const CONFIRMATION_TOKEN_KEY: &str = "ConfirmationToken";

/// Attribute key read by repositories as the account's email address.
pub const EMAIL_KEY: &str = "Email";

/// Additional user profile values stored alongside a new account.
pub type AccountAttributes = HashMap<String, serde_json::Value>;

/// Stored credential state for one account.
///
/// Owned by the repository. The service only changes it through the
/// repository's explicit update operations.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
    pub is_confirmed: bool,
    pub confirmation_token: Option<String>,
    pub attributes: AccountAttributes,
    pub created_at: DateTime<Utc>,
    pub password_changed_at: DateTime<Utc>,
    /// `None` means the password has never been entered incorrectly.
    pub last_password_failure_at: Option<DateTime<Utc>>,
    pub password_failures_since_last_success: u32,
    /// Last time the user was reported online by a lookup.
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Build the record for a freshly created account.
    ///
    /// Accounts created without confirmation are confirmed immediately.
    pub fn new(
        username: String,
        password_hash: String,
        require_confirmation: bool,
        attributes: AccountAttributes,
    ) -> Self {
        let now = Utc::now();
        let confirmation_token = if require_confirmation {
            attributes
                .get(CONFIRMATION_TOKEN_KEY)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        } else {
            None
        };

        Self {
            username,
            password_hash,
            is_confirmed: !require_confirmation,
            confirmation_token,
            attributes,
            created_at: now,
            password_changed_at: now,
            last_password_failure_at: None,
            password_failures_since_last_success: 0,
            last_activity_at: None,
        }
    }

    pub fn record_success(&mut self) {
        self.password_failures_since_last_success = 0;
    }

    pub fn record_failure(&mut self, at: DateTime<Utc>) {
        self.password_failures_since_last_success =
            self.password_failures_since_last_success.saturating_add(1);
        self.last_password_failure_at = Some(at);
    }

    pub fn record_activity(&mut self, at: DateTime<Utc>) {
        self.last_activity_at = Some(at);
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.password_changed_at = Utc::now();
    }

    /// Mark the account confirmed and invalidate its pending token.
    pub fn confirm(&mut self) {
        self.is_confirmed = true;
        self.confirmation_token = None;
    }

    pub fn has_pending_token(&self, token: &str) -> bool {
        self.confirmation_token.as_deref() == Some(token)
    }
}

/// Read-only snapshot of an account as reported to the framework.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipUser {
    pub provider_name: String,
    pub username: String,
    pub email: Option<String>,
    pub is_confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub password_changed_at: DateTime<Utc>,
    pub last_password_failure_at: Option<DateTime<Utc>>,
    pub password_failures_since_last_success: u32,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl MembershipUser {
    /// Snapshot a credential record under the given provider name.
    pub fn from_record(provider_name: &str, record: &CredentialRecord) -> Self {
        Self {
            provider_name: provider_name.to_string(),
            username: record.username.clone(),
            email: record
                .attributes
                .get(EMAIL_KEY)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            is_confirmed: record.is_confirmed,
            created_at: record.created_at,
            password_changed_at: record.password_changed_at,
            last_password_failure_at: record.last_password_failure_at,
            password_failures_since_last_success: record.password_failures_since_last_success,
            last_activity_at: record.last_activity_at,
        }
    }
}
