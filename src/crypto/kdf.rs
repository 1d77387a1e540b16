use super::{KEY_LEN, SALT_LEN};
use crate::error::{CryptoError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

/// Default PBKDF2 work factor recorded into every payload.
pub const DEFAULT_ITERATIONS: u32 = 200_000;
/// Floor below which an iteration count is rejected outright.
pub const MIN_ITERATIONS: u32 = 10_000;

/// A 32-byte key derived for exactly one encrypt or decrypt call.
///
/// The buffer is zeroed when the value drops, on every exit path of the
/// operation that owns it.
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Reject iteration counts below [`MIN_ITERATIONS`].
pub fn validate_iterations(iterations: u32) -> Result<()> {
    if iterations < MIN_ITERATIONS {
        return Err(CryptoError::InvalidArgument(
            "iteration count below the configured minimum",
        ));
    }
    Ok(())
}

/// Derive an encryption key from a password with PBKDF2-HMAC-SHA-256.
///
/// Deterministic: the same (password, salt, iterations) always yields the
/// same key, which is what lets decryption reproduce the key from the
/// salt and iteration count stored in the payload.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN], iterations: u32) -> Result<DerivedKey> {
    validate_iterations(iterations)?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);

    Ok(DerivedKey(key))
}
