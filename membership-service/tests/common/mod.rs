#![allow(dead_code)]

use std::sync::Arc;

use auth::PasswordPolicy;
use membership_service::config::Config;
use membership_service::config::ProviderConfig;
use membership_service::membership::ports::MembershipServicePort;
use membership_service::membership::service::MembershipService;
use membership_service::outbound::password::Argon2PasswordService;
use membership_service::repositories::InMemoryCredentialRepository;
use membership_service::repositories::InMemoryRoleRepository;
use membership_service::roles::service::RoleService;

pub const DAVE: &str = "Dave";
pub const DAVE_PASSWORD: &str = "Dave's Password";
pub const JANE: &str = "Jane";
pub const JANE_PASSWORD: &str = "Jane's Password";
pub const INVALID_USER: &str = "Sponklefield";
pub const INVALID_PASSWORD: &str = "anaplaster";

pub type TestMembershipService =
    MembershipService<InMemoryCredentialRepository, Argon2PasswordService>;

/// Services wired the way a host application wires them, over in-memory stores.
pub struct TestProviders {
    pub config: Config,
    pub credentials: Arc<InMemoryCredentialRepository>,
    pub membership: Arc<TestMembershipService>,
    pub role_repository: Arc<InMemoryRoleRepository>,
    pub roles: Arc<RoleService<InMemoryRoleRepository>>,
}

impl TestProviders {
    pub fn new() -> Self {
        let config = Config {
            provider: ProviderConfig {
                application_name: "membership-tests".to_string(),
                provider_name: "TestMembershipProvider".to_string(),
            },
            password: PasswordPolicy::new(8, 1),
        };

        let credentials = Arc::new(InMemoryCredentialRepository::new());
        let membership = Arc::new(
            MembershipService::builder()
                .repository(Arc::clone(&credentials))
                .password_service(Arc::new(Argon2PasswordService::new(
                    config.password.clone(),
                )))
                .provider_name(config.provider.provider_name.clone())
                .build()
                .expect("Failed to build membership service"),
        );

        let role_repository = Arc::new(InMemoryRoleRepository::new());
        let roles = Arc::new(RoleService::new(Arc::clone(&role_repository)));

        Self {
            config,
            credentials,
            membership,
            role_repository,
            roles,
        }
    }

    /// Register Dave and Jane as confirmed accounts.
    pub async fn with_users() -> Self {
        let providers = Self::new();
        for (username, password) in [(DAVE, DAVE_PASSWORD), (JANE, JANE_PASSWORD)] {
            providers
                .membership
                .create_user_and_account(username, password, false, None)
                .await
                .expect("Failed to seed user");
        }
        providers
    }

    /// Assign user1 to RoleA, RoleB and RoleC; user2 to RoleB only.
    pub fn with_roles() -> Self {
        let providers = Self::new();
        for role in ["RoleA", "RoleB", "RoleC"] {
            providers.role_repository.assign("user1", role);
        }
        providers.role_repository.assign("user2", "RoleB");
        providers
    }
}
