use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

/// Generates opaque account confirmation tokens.
///
/// Tokens are 32 bytes from the OS random source, hex encoded.
pub struct ConfirmationTokenGenerator;

impl ConfirmationTokenGenerator {
    const TOKEN_BYTES: usize = 32;

    pub fn new() -> Self {
        Self
    }

    /// Produce a new token. Every call returns a fresh value.
    pub fn generate(&self) -> String {
        let mut bytes = [0u8; Self::TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for ConfirmationTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
