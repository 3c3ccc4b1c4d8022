use auth::ConfirmationTokenGenerator;
use auth::PasswordHasher;
use auth::PasswordPolicy;

use crate::membership::errors::PasswordError;
use crate::membership::ports::PasswordService;

/// Argon2id-backed implementation of the password port.
pub struct Argon2PasswordService {
    hasher: PasswordHasher,
    tokens: ConfirmationTokenGenerator,
    policy: PasswordPolicy,
}

impl Argon2PasswordService {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            hasher: PasswordHasher::new(),
            tokens: ConfirmationTokenGenerator::new(),
            policy,
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new(PasswordPolicy::default())
    }
}

impl From<auth::PasswordError> for PasswordError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::HashingFailed(msg) => PasswordError::HashingFailed(msg),
            auth::PasswordError::MalformedHash(msg) => PasswordError::VerificationFailed(msg),
        }
    }
}

impl PasswordService for Argon2PasswordService {
    fn create_hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(self.hasher.hash(password)?)
    }

    fn validate_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PasswordError> {
        Ok(self.hasher.verify(password, password_hash)?)
    }

    fn create_confirmation_token(&self) -> String {
        self.tokens.generate()
    }

    fn min_required_password_length(&self) -> usize {
        self.policy.min_required_password_length
    }

    fn min_required_non_alphanumeric_characters(&self) -> usize {
        self.policy.min_required_non_alphanumeric_characters
    }

    fn password_strength_regular_expression(&self) -> String {
        self.policy.password_strength_regular_expression.clone()
    }
}
