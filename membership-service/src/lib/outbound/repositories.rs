pub mod credential;
pub mod role;

pub use credential::InMemoryCredentialRepository;
pub use role::InMemoryRoleRepository;
