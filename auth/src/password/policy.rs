use serde::Deserialize;

/// Password policy parameters advertised to callers.
///
/// The hashing layer only exposes these values; enforcing them is left to
/// whoever collects the password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_required_password_length: usize,
    pub min_required_non_alphanumeric_characters: usize,
    pub password_strength_regular_expression: String,
}

impl PasswordPolicy {
    const DEFAULT_MIN_LENGTH: usize = 6;

    /// Policy with the given length and non-alphanumeric requirements and no strength pattern.
    pub fn new(min_length: usize, min_non_alphanumeric: usize) -> Self {
        Self {
            min_required_password_length: min_length,
            min_required_non_alphanumeric_characters: min_non_alphanumeric,
            password_strength_regular_expression: String::new(),
        }
    }

    /// Set the strength pattern.
    pub fn with_strength_expression(mut self, pattern: impl Into<String>) -> Self {
        self.password_strength_regular_expression = pattern.into();
        self
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_LENGTH, 0)
    }
}
