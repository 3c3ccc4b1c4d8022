use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::membership::errors::MembershipError;
use crate::membership::models::AccountAttributes;
use crate::membership::models::MembershipUser;
use crate::membership::models::CONFIRMATION_TOKEN_KEY;
use crate::membership::ports::CredentialRepository;
use crate::membership::ports::MembershipServicePort;
use crate::membership::ports::PasswordService;

/// Provider name reported on user snapshots when none is configured.
pub const DEFAULT_PROVIDER_NAME: &str = "RepositoryMembershipProvider";

/// Domain service implementation for credential operations.
///
/// Collaborators are fixed at construction, so every operation runs
/// against a fully configured service.
pub struct MembershipService<CR, PS>
where
    CR: CredentialRepository,
    PS: PasswordService,
{
    repository: Arc<CR>,
    password_service: Arc<PS>,
    provider_name: String,
}

impl<CR, PS> MembershipService<CR, PS>
where
    CR: CredentialRepository,
    PS: PasswordService,
{
    /// Create a new membership service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential persistence implementation
    /// * `password_service` - Hashing and token implementation
    ///
    /// # Returns
    /// Configured membership service instance
    pub fn new(repository: Arc<CR>, password_service: Arc<PS>) -> Self {
        Self {
            repository,
            password_service,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
        }
    }

    /// Start building a service from individually supplied collaborators.
    pub fn builder() -> MembershipServiceBuilder<CR, PS> {
        MembershipServiceBuilder::default()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    async fn stored_hash(&self, username: &str) -> Result<Option<String>, MembershipError> {
        Ok(self
            .repository
            .get_hashed_password_for_user(username)
            .await?
            .filter(|hash| !hash.is_empty()))
    }

    /// Verify against a stored hash. An unparseable hash never authenticates.
    fn verify(&self, username: &str, password: &str, password_hash: &str) -> bool {
        match self
            .password_service
            .validate_password(password, password_hash)
        {
            Ok(is_valid) => is_valid,
            Err(e) => {
                tracing::warn!(
                    username = %username,
                    error = %e,
                    "Stored password hash could not be verified"
                );
                false
            }
        }
    }
}

/// Collects collaborators and rejects incomplete wiring in [`build`](Self::build).
pub struct MembershipServiceBuilder<CR, PS> {
    repository: Option<Arc<CR>>,
    password_service: Option<Arc<PS>>,
    provider_name: String,
}

impl<CR, PS> Default for MembershipServiceBuilder<CR, PS> {
    fn default() -> Self {
        Self {
            repository: None,
            password_service: None,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
        }
    }
}

impl<CR, PS> MembershipServiceBuilder<CR, PS>
where
    CR: CredentialRepository,
    PS: PasswordService,
{
    pub fn repository(mut self, repository: Arc<CR>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn password_service(mut self, password_service: Arc<PS>) -> Self {
        self.password_service = Some(password_service);
        self
    }

    pub fn provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = provider_name.into();
        self
    }

    /// Finish construction.
    ///
    /// # Errors
    /// * `Configuration` - Repository or password service missing (repository reported first)
    pub fn build(self) -> Result<MembershipService<CR, PS>, MembershipError> {
        let repository = self.repository.ok_or_else(|| {
            MembershipError::Configuration("membership repository is not set".to_string())
        })?;
        let password_service = self.password_service.ok_or_else(|| {
            MembershipError::Configuration("password service is not set".to_string())
        })?;

        Ok(MembershipService {
            repository,
            password_service,
            provider_name: self.provider_name,
        })
    }
}

fn require(value: &str, name: &'static str) -> Result<(), MembershipError> {
    if value.is_empty() {
        Err(MembershipError::InvalidArgument(name))
    } else {
        Ok(())
    }
}

#[async_trait]
impl<CR, PS> MembershipServicePort for MembershipService<CR, PS>
where
    CR: CredentialRepository,
    PS: PasswordService,
{
    async fn validate_user(&self, username: &str, password: &str) -> Result<bool, MembershipError> {
        let is_valid = match self.stored_hash(username).await? {
            Some(hash) => self.verify(username, password, &hash),
            None => false,
        };

        // Unknown users take the failure path too, so the two cases look the same from outside.
        if is_valid {
            self.repository
                .update_password_success_state(username)
                .await?;
        } else {
            self.repository
                .update_password_failure_state(username)
                .await?;
        }

        tracing::debug!(username = %username, is_valid, "Credentials validated");

        Ok(is_valid)
    }

    async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<bool, MembershipError> {
        require(username, "username")?;
        require(old_password, "old_password")?;
        require(new_password, "new_password")?;

        let is_valid = match self.stored_hash(username).await? {
            Some(hash) => self.verify(username, old_password, &hash),
            None => false,
        };
        if !is_valid {
            tracing::debug!(username = %username, "Password change rejected");
            return Ok(false);
        }

        let new_hash = self.password_service.create_hash(new_password)?;
        let changed = self.repository.change_password(username, &new_hash).await?;

        tracing::info!(username = %username, changed, "Password change processed");

        Ok(changed)
    }

    async fn create_user_and_account(
        &self,
        username: &str,
        password: &str,
        require_confirmation: bool,
        attributes: Option<AccountAttributes>,
    ) -> Result<Option<String>, MembershipError> {
        let mut attributes = attributes.unwrap_or_default();

        if require_confirmation {
            let token = self.password_service.create_confirmation_token();
            attributes.insert(
                CONFIRMATION_TOKEN_KEY.to_string(),
                serde_json::Value::String(token),
            );
        }

        let password_hash = self.password_service.create_hash(password)?;

        let token = self
            .repository
            .create_user_and_account(username, &password_hash, require_confirmation, attributes)
            .await?;

        tracing::info!(
            username = %username,
            require_confirmation,
            "User and account created"
        );

        Ok(token)
    }

    async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError> {
        require(token, "account_confirmation_token")?;

        self.repository.confirm_account(token).await
    }

    async fn confirm_account_for_user(
        &self,
        username: &str,
        token: &str,
    ) -> Result<bool, MembershipError> {
        require(username, "username")?;
        require(token, "account_confirmation_token")?;

        self.repository
            .confirm_account_for_user(username, token)
            .await
    }

    async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError> {
        self.repository.is_confirmed(username).await
    }

    async fn get_last_password_failure_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        self.repository.get_last_password_failure_date(username).await
    }

    async fn get_password_changed_date(
        &self,
        username: &str,
    ) -> Result<Option<DateTime<Utc>>, MembershipError> {
        self.repository.get_password_changed_date(username).await
    }

    async fn get_password_failures_since_last_success(
        &self,
        username: &str,
    ) -> Result<u32, MembershipError> {
        self.repository
            .get_password_failures_since_last_success(username)
            .await
    }

    async fn get_user(
        &self,
        username: &str,
        user_is_online: bool,
    ) -> Result<Option<MembershipUser>, MembershipError> {
        if username.is_empty() {
            return Ok(None);
        }

        self.repository
            .find_user(&self.provider_name, username, user_is_online)
            .await
    }

    fn min_required_password_length(&self) -> usize {
        self.password_service.min_required_password_length()
    }

    fn min_required_non_alphanumeric_characters(&self) -> usize {
        self.password_service
            .min_required_non_alphanumeric_characters()
    }

    fn password_strength_regular_expression(&self) -> String {
        self.password_service.password_strength_regular_expression()
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::membership::errors::PasswordError;

    const DAVE: &str = "Dave";
    const DAVE_PASSWORD: &str = "Dave's Password";
    const DAVE_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dave$hash";

    mock! {
        pub TestCredentialRepository {}

        #[async_trait]
        impl CredentialRepository for TestCredentialRepository {
            async fn get_hashed_password_for_user(&self, username: &str) -> Result<Option<String>, MembershipError>;
            async fn change_password(&self, username: &str, password_hash: &str) -> Result<bool, MembershipError>;
            async fn update_password_success_state(&self, username: &str) -> Result<(), MembershipError>;
            async fn update_password_failure_state(&self, username: &str) -> Result<(), MembershipError>;
            async fn create_user_and_account(&self, username: &str, password_hash: &str, require_confirmation: bool, attributes: AccountAttributes) -> Result<Option<String>, MembershipError>;
            async fn confirm_account(&self, token: &str) -> Result<bool, MembershipError>;
            async fn confirm_account_for_user(&self, username: &str, token: &str) -> Result<bool, MembershipError>;
            async fn is_confirmed(&self, username: &str) -> Result<bool, MembershipError>;
            async fn get_last_password_failure_date(&self, username: &str) -> Result<Option<DateTime<Utc>>, MembershipError>;
            async fn get_password_changed_date(&self, username: &str) -> Result<Option<DateTime<Utc>>, MembershipError>;
            async fn get_password_failures_since_last_success(&self, username: &str) -> Result<u32, MembershipError>;
            async fn find_user(&self, provider_name: &str, username: &str, user_is_online: bool) -> Result<Option<MembershipUser>, MembershipError>;
        }
    }

    mock! {
        pub TestPasswordService {}

        impl PasswordService for TestPasswordService {
            fn create_hash(&self, password: &str) -> Result<String, PasswordError>;
            fn validate_password(&self, password: &str, password_hash: &str) -> Result<bool, PasswordError>;
            fn create_confirmation_token(&self) -> String;
            fn min_required_password_length(&self) -> usize;
            fn min_required_non_alphanumeric_characters(&self) -> usize;
            fn password_strength_regular_expression(&self) -> String;
        }
    }

    fn service(
        repository: MockTestCredentialRepository,
        password_service: MockTestPasswordService,
    ) -> MembershipService<MockTestCredentialRepository, MockTestPasswordService> {
        MembershipService::new(Arc::new(repository), Arc::new(password_service))
    }

    fn dave_password_service() -> MockTestPasswordService {
        let mut password_service = MockTestPasswordService::new();
        password_service
            .expect_validate_password()
            .returning(|password, hash| Ok(password == DAVE_PASSWORD && hash == DAVE_HASH));
        password_service
    }

    fn repository_with_dave() -> MockTestCredentialRepository {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_get_hashed_password_for_user()
            .returning(|username| {
                Ok(if username == DAVE {
                    Some(DAVE_HASH.to_string())
                } else {
                    None
                })
            });
        repository
    }

    #[tokio::test]
    async fn test_validate_user_success_updates_success_state_only() {
        let mut repository = repository_with_dave();
        repository
            .expect_update_password_success_state()
            .withf(|username| username == DAVE)
            .times(1)
            .returning(|_| Ok(()));
        repository.expect_update_password_failure_state().times(0);

        let service = service(repository, dave_password_service());

        let result = service.validate_user(DAVE, DAVE_PASSWORD).await;
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_validate_user_wrong_password_updates_failure_state_only() {
        let mut repository = repository_with_dave();
        repository.expect_update_password_success_state().times(0);
        repository
            .expect_update_password_failure_state()
            .withf(|username| username == DAVE)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(repository, dave_password_service());

        let result = service.validate_user(DAVE, "wrong").await;
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_validate_user_unknown_user_still_records_failure() {
        let mut repository = repository_with_dave();
        repository.expect_update_password_success_state().times(0);
        repository
            .expect_update_password_failure_state()
            .withf(|username| username == "Sponklefield")
            .times(1)
            .returning(|_| Ok(()));

        let mut password_service = MockTestPasswordService::new();
        password_service.expect_validate_password().times(0);

        let service = service(repository, password_service);

        let result = service.validate_user("Sponklefield", "anaplaster").await;
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_validate_user_empty_stored_hash_counts_as_unknown() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_get_hashed_password_for_user()
            .times(1)
            .returning(|_| Ok(Some(String::new())));
        repository
            .expect_update_password_failure_state()
            .times(1)
            .returning(|_| Ok(()));

        let mut password_service = MockTestPasswordService::new();
        password_service.expect_validate_password().times(0);

        let service = service(repository, password_service);

        assert!(!service.validate_user(DAVE, DAVE_PASSWORD).await.unwrap());
    }

    #[tokio::test]
    async fn test_validate_user_malformed_hash_is_a_failure() {
        let mut repository = repository_with_dave();
        repository
            .expect_update_password_failure_state()
            .times(1)
            .returning(|_| Ok(()));
        repository.expect_update_password_success_state().times(0);

        let mut password_service = MockTestPasswordService::new();
        password_service
            .expect_validate_password()
            .times(1)
            .returning(|_, _| Err(PasswordError::VerificationFailed("bad hash".to_string())));

        let service = service(repository, password_service);

        assert!(!service.validate_user(DAVE, DAVE_PASSWORD).await.unwrap());
    }

    #[tokio::test]
    async fn test_validate_user_propagates_repository_error() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_get_hashed_password_for_user()
            .returning(|_| Err(MembershipError::DatabaseError("connection reset".to_string())));
        repository.expect_update_password_failure_state().times(0);
        repository.expect_update_password_success_state().times(0);

        let service = service(repository, MockTestPasswordService::new());

        let result = service.validate_user(DAVE, DAVE_PASSWORD).await;
        assert!(matches!(result, Err(MembershipError::DatabaseError(_))));
    }

    #[test]
    fn test_builder_without_password_service_is_configuration_error() {
        // No expectations: any repository call would panic.
        let repository = MockTestCredentialRepository::new();

        let result =
            MembershipService::<MockTestCredentialRepository, MockTestPasswordService>::builder()
                .repository(Arc::new(repository))
                .build();

        match result {
            Err(MembershipError::Configuration(message)) => {
                assert!(message.contains("password service"))
            }
            _ => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn test_builder_reports_missing_repository_first() {
        let result =
            MembershipService::<MockTestCredentialRepository, MockTestPasswordService>::builder()
                .build();

        match result {
            Err(MembershipError::Configuration(message)) => {
                assert!(message.contains("repository"))
            }
            _ => panic!("expected a configuration error"),
        }
    }

    #[tokio::test]
    async fn test_builder_with_collaborators_builds_working_service() {
        let mut repository = repository_with_dave();
        repository
            .expect_update_password_success_state()
            .times(1)
            .returning(|_| Ok(()));

        let service = MembershipService::builder()
            .repository(Arc::new(repository))
            .password_service(Arc::new(dave_password_service()))
            .provider_name("TestProvider")
            .build()
            .expect("Failed to build service");

        assert_eq!(service.provider_name(), "TestProvider");
        assert!(service.validate_user(DAVE, DAVE_PASSWORD).await.unwrap());
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let mut repository = repository_with_dave();
        repository
            .expect_change_password()
            .withf(|username, hash| username == DAVE && hash == "$argon2id$new")
            .times(1)
            .returning(|_, _| Ok(true));
        repository.expect_update_password_failure_state().times(0);
        repository.expect_update_password_success_state().times(0);

        let mut password_service = dave_password_service();
        password_service
            .expect_create_hash()
            .withf(|password| password == "new password")
            .times(1)
            .returning(|_| Ok("$argon2id$new".to_string()));

        let service = service(repository, password_service);

        let result = service
            .change_password(DAVE, DAVE_PASSWORD, "new password")
            .await;
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_change_password_wrong_old_password_mutates_nothing() {
        let mut repository = repository_with_dave();
        repository.expect_change_password().times(0);
        repository.expect_update_password_failure_state().times(0);

        let mut password_service = dave_password_service();
        password_service.expect_create_hash().times(0);

        let service = service(repository, password_service);

        let result = service.change_password(DAVE, "wrong", "new password").await;
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_change_password_unknown_user() {
        let mut repository = repository_with_dave();
        repository.expect_change_password().times(0);

        let service = service(repository, dave_password_service());

        let result = service
            .change_password("Sponklefield", "anaplaster", "new password")
            .await;
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_change_password_returns_repository_outcome() {
        let mut repository = repository_with_dave();
        repository
            .expect_change_password()
            .times(1)
            .returning(|_, _| Ok(false));

        let mut password_service = dave_password_service();
        password_service
            .expect_create_hash()
            .returning(|_| Ok("$argon2id$new".to_string()));

        let service = service(repository, password_service);

        let result = service.change_password(DAVE, DAVE_PASSWORD, "new").await;
        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn test_change_password_rejects_empty_arguments() {
        let service = service(
            MockTestCredentialRepository::new(),
            MockTestPasswordService::new(),
        );

        assert!(matches!(
            service.change_password("", "old", "new").await,
            Err(MembershipError::InvalidArgument("username"))
        ));
        assert!(matches!(
            service.change_password(DAVE, "", "new").await,
            Err(MembershipError::InvalidArgument("old_password"))
        ));
        assert!(matches!(
            service.change_password(DAVE, "old", "").await,
            Err(MembershipError::InvalidArgument("new_password"))
        ));
    }

    #[tokio::test]
    async fn test_create_user_and_account_with_confirmation() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_create_user_and_account()
            .withf(|username, hash, require_confirmation, attributes| {
                username == DAVE
                    && hash == "$argon2id$dave"
                    && *require_confirmation
                    && attributes.get(CONFIRMATION_TOKEN_KEY)
                        == Some(&serde_json::json!("EABC#"))
            })
            .times(1)
            .returning(|_, _, _, attributes| {
                Ok(attributes
                    .get(CONFIRMATION_TOKEN_KEY)
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string()))
            });

        let mut password_service = MockTestPasswordService::new();
        password_service
            .expect_create_confirmation_token()
            .times(1)
            .returning(|| "EABC#".to_string());
        password_service
            .expect_create_hash()
            .withf(|password| password == DAVE_PASSWORD)
            .times(1)
            .returning(|_| Ok("$argon2id$dave".to_string()));

        let service = service(repository, password_service);

        let token = service
            .create_user_and_account(DAVE, DAVE_PASSWORD, true, None)
            .await
            .unwrap();
        assert_eq!(token.as_deref(), Some("EABC#"));
    }

    #[tokio::test]
    async fn test_create_user_and_account_without_confirmation_adds_no_token() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_create_user_and_account()
            .withf(|_, _, require_confirmation, attributes| {
                !*require_confirmation
                    && !attributes.contains_key(CONFIRMATION_TOKEN_KEY)
                    && attributes.get("Email") == Some(&serde_json::json!("dave@anywhere.com"))
            })
            .times(1)
            .returning(|_, _, _, _| Ok(None));

        let mut password_service = MockTestPasswordService::new();
        password_service.expect_create_confirmation_token().times(0);
        password_service
            .expect_create_hash()
            .returning(|_| Ok("$argon2id$dave".to_string()));

        let service = service(repository, password_service);

        let mut attributes = AccountAttributes::new();
        attributes.insert("Email".to_string(), serde_json::json!("dave@anywhere.com"));

        let token = service
            .create_user_and_account(DAVE, DAVE_PASSWORD, false, Some(attributes))
            .await
            .unwrap();
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_create_user_and_account_hashing_failure() {
        let mut repository = MockTestCredentialRepository::new();
        repository.expect_create_user_and_account().times(0);

        let mut password_service = MockTestPasswordService::new();
        password_service
            .expect_create_hash()
            .returning(|_| Err(PasswordError::HashingFailed("out of memory".to_string())));

        let service = service(repository, password_service);

        let result = service
            .create_user_and_account(DAVE, DAVE_PASSWORD, false, None)
            .await;
        assert!(matches!(result, Err(MembershipError::Password(_))));
    }

    #[tokio::test]
    async fn test_confirm_account_delegates() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_confirm_account()
            .returning(|token| Ok(token == "EABC#"));
        repository
            .expect_confirm_account_for_user()
            .returning(|username, token| Ok(username == DAVE && token == "EABC#"));

        let service = service(repository, MockTestPasswordService::new());

        assert!(service.confirm_account("EABC#").await.unwrap());
        assert!(!service.confirm_account("DFDA#").await.unwrap());
        assert!(service
            .confirm_account_for_user(DAVE, "EABC#")
            .await
            .unwrap());
        assert!(!service
            .confirm_account_for_user("Sponklefield", "EABC#")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_confirm_account_rejects_empty_arguments() {
        let service = service(
            MockTestCredentialRepository::new(),
            MockTestPasswordService::new(),
        );

        assert!(matches!(
            service.confirm_account("").await,
            Err(MembershipError::InvalidArgument("account_confirmation_token"))
        ));
        assert!(matches!(
            service.confirm_account_for_user("", "EABC#").await,
            Err(MembershipError::InvalidArgument("username"))
        ));
        assert!(matches!(
            service.confirm_account_for_user(DAVE, "").await,
            Err(MembershipError::InvalidArgument("account_confirmation_token"))
        ));
    }

    #[tokio::test]
    async fn test_read_only_queries_delegate() {
        let failure_at = Utc::now();
        let changed_at = failure_at - chrono::Duration::days(3);

        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_is_confirmed()
            .returning(|username| Ok(username == DAVE));
        repository
            .expect_get_last_password_failure_date()
            .times(1)
            .returning(move |_| Ok(Some(failure_at)));
        repository
            .expect_get_password_changed_date()
            .times(1)
            .returning(move |_| Ok(Some(changed_at)));
        repository
            .expect_get_password_failures_since_last_success()
            .times(1)
            .returning(|_| Ok(3));

        let service = service(repository, MockTestPasswordService::new());

        assert!(service.is_confirmed(DAVE).await.unwrap());
        assert!(!service.is_confirmed("Sponklefield").await.unwrap());
        assert_eq!(
            service.get_last_password_failure_date("Jane").await.unwrap(),
            Some(failure_at)
        );
        assert_eq!(
            service.get_password_changed_date("Jane").await.unwrap(),
            Some(changed_at)
        );
        assert_eq!(
            service
                .get_password_failures_since_last_success("Jane")
                .await
                .unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn test_get_user_with_empty_username_skips_repository() {
        let mut repository = MockTestCredentialRepository::new();
        repository.expect_find_user().times(0);

        let service = service(repository, MockTestPasswordService::new());

        assert!(service.get_user("", true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_user_passes_provider_name_and_online_flag() {
        let mut repository = MockTestCredentialRepository::new();
        repository
            .expect_find_user()
            .withf(|provider_name, username, user_is_online| {
                provider_name == DEFAULT_PROVIDER_NAME && username == DAVE && *user_is_online
            })
            .times(1)
            .returning(|_, _, _| Ok(None));

        let service = service(repository, MockTestPasswordService::new());

        assert!(service.get_user(DAVE, true).await.unwrap().is_none());
    }

    #[test]
    fn test_policy_values_come_from_password_service() {
        let mut password_service = MockTestPasswordService::new();
        password_service
            .expect_min_required_password_length()
            .return_const(8usize);
        password_service
            .expect_min_required_non_alphanumeric_characters()
            .return_const(1usize);
        password_service
            .expect_password_strength_regular_expression()
            .returning(|| r"^.*\d.*$".to_string());

        let service = service(MockTestCredentialRepository::new(), password_service);

        assert_eq!(service.min_required_password_length(), 8);
        assert_eq!(service.min_required_non_alphanumeric_characters(), 1);
        assert_eq!(service.password_strength_regular_expression(), r"^.*\d.*$");
    }
}
